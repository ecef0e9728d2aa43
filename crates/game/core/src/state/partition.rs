//! Continent discovery.

use super::{Continent, ContinentId, Zone, ZoneId};

/// Partitions the zones into connected components.
///
/// Continents are numbered in order of their lowest zone id. Each zone gets
/// its continent id written back; per-continent platinum and value are
/// computed before returning.
pub(super) fn flood_fill(zones: &mut [Zone]) -> Vec<Continent> {
    let mut assigned = vec![false; zones.len()];
    let mut continents = Vec::new();
    let mut stack = Vec::new();

    for start in 0..zones.len() {
        if assigned[start] {
            continue;
        }

        let mut continent = Continent::new(ContinentId(continents.len() as u32));
        assigned[start] = true;
        stack.push(ZoneId(start as u32));

        while let Some(id) = stack.pop() {
            let zone = &mut zones[id.index()];
            zone.continent = continent.id;
            continent.zones.push(id);
            continent.platinum += zone.platinum;

            for &neighbour in zone.links.iter().rev() {
                if !assigned[neighbour.index()] {
                    assigned[neighbour.index()] = true;
                    stack.push(neighbour);
                }
            }
        }

        continent.compute_value();
        continents.push(continent);
    }

    continents
}
