//! Match protocol: whitespace-separated integers on the input stream, two
//! command lines per turn on the output stream.
//!
//! ```text
//! setup  : playerCount myId zoneCount linkCount
//!          zoneCount × (zoneId platinum)
//!          linkCount × (zone1 zone2)
//! turn   : platinum
//!          zoneCount × (zoneId ownerId podsP0 podsP1 podsP2 podsP3)
//! output : moves line     (count from to)* | WAIT
//!          purchases line (count zone)*    | WAIT
//! ```
//!
//! Tokens may be split across lines arbitrarily.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

use rift_core::{
    CommandBuffer, EngineConfig, Garrison, Owner, PlayerId, ZoneId, ZoneObservation, ZoneSpec,
};

use crate::error::ProtocolError;

/// Topology announced before the first turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchSetup {
    pub player_count: u8,
    pub me: PlayerId,
    pub zones: Vec<ZoneSpec>,
    pub links: Vec<(ZoneId, ZoneId)>,
}

/// Everything the engine learns at the start of a turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnObservation {
    pub platinum: u32,
    pub zones: Vec<ZoneObservation>,
}

/// Token reader over a buffered input stream.
pub struct ProtocolReader<R> {
    input: R,
    tokens: VecDeque<String>,
}

impl<R: BufRead> ProtocolReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            tokens: VecDeque::new(),
        }
    }

    pub fn read_setup(&mut self) -> Result<MatchSetup, ProtocolError> {
        let player_count: u8 = self.read_value("player count")?;
        if !(1..=EngineConfig::MAX_PLAYERS as u8).contains(&player_count) {
            return Err(ProtocolError::OutOfRange {
                field: "player count",
                value: i64::from(player_count),
            });
        }
        let me: u8 = self.read_value("player id")?;
        if me >= player_count {
            return Err(ProtocolError::OutOfRange {
                field: "player id",
                value: i64::from(me),
            });
        }
        let zone_count: usize = self.read_value("zone count")?;
        let link_count: usize = self.read_value("link count")?;

        let mut zones = Vec::with_capacity(zone_count);
        for _ in 0..zone_count {
            zones.push(ZoneSpec {
                id: ZoneId(self.read_value("zone id")?),
                platinum: self.read_value("zone platinum")?,
            });
        }

        let mut links = Vec::with_capacity(link_count);
        for _ in 0..link_count {
            let a = ZoneId(self.read_value("link origin")?);
            let b = ZoneId(self.read_value("link destination")?);
            links.push((a, b));
        }

        Ok(MatchSetup {
            player_count,
            me: PlayerId(me),
            zones,
            links,
        })
    }

    /// Reads one turn, or `None` when the input ends cleanly before it starts.
    pub fn read_turn(
        &mut self,
        setup: &MatchSetup,
    ) -> Result<Option<TurnObservation>, ProtocolError> {
        let Some(token) = self.next_token()? else {
            return Ok(None);
        };
        let platinum = parse(token, "platinum")?;

        let mut zones = Vec::with_capacity(setup.zones.len());
        for _ in 0..setup.zones.len() {
            let id = ZoneId(self.read_value("zone id")?);
            let raw_owner: i32 = self.read_value("owner id")?;
            let owner = Owner::from_protocol(raw_owner).ok_or(ProtocolError::InvalidOwner {
                zone: id,
                owner: raw_owner,
            })?;
            let mut columns = [0u32; 4];
            for column in &mut columns {
                *column = self.read_value("pod count")?;
            }
            zones.push(ZoneObservation {
                id,
                owner,
                garrison: Garrison::from_columns(columns, setup.me),
            });
        }

        Ok(Some(TurnObservation { platinum, zones }))
    }

    fn read_value<T: FromStr>(&mut self, expected: &'static str) -> Result<T, ProtocolError> {
        let token = self
            .next_token()?
            .ok_or(ProtocolError::UnexpectedEof { expected })?;
        parse(token, expected)
    }

    fn next_token(&mut self) -> Result<Option<String>, ProtocolError> {
        while self.tokens.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.tokens
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.tokens.pop_front())
    }
}

fn parse<T: FromStr>(token: String, expected: &'static str) -> Result<T, ProtocolError> {
    token
        .parse()
        .map_err(|_| ProtocolError::InvalidToken { expected, token })
}

/// Writes the move line then the purchase line and flushes.
pub fn write_commands<W: Write>(
    output: &mut W,
    commands: &CommandBuffer,
) -> Result<(), ProtocolError> {
    writeln!(output, "{}", commands.move_line())?;
    writeln!(output, "{}", commands.purchase_line())?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_may_span_lines() {
        let input = "2 1\n3 2\n0 0 1 2\n2 1\n0 1 1\n2\n";
        let mut reader = ProtocolReader::new(input.as_bytes());
        let setup = reader.read_setup().unwrap();

        assert_eq!(setup.player_count, 2);
        assert_eq!(setup.me, PlayerId(1));
        assert_eq!(setup.zones.len(), 3);
        assert_eq!(setup.zones[1].platinum, 2);
        assert_eq!(setup.links, vec![(ZoneId(0), ZoneId(1)), (ZoneId(1), ZoneId(2))]);
    }

    #[test]
    fn malformed_token_is_reported() {
        let mut reader = ProtocolReader::new("2 x 1 0\n".as_bytes());
        match reader.read_setup() {
            Err(ProtocolError::InvalidToken { expected, token }) => {
                assert_eq!(expected, "player id");
                assert_eq!(token, "x");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn truncated_setup_is_fatal() {
        let mut reader = ProtocolReader::new("2 0 2 0\n0 1\n".as_bytes());
        assert!(matches!(
            reader.read_setup(),
            Err(ProtocolError::UnexpectedEof { expected: "zone id" })
        ));
    }
}
