//! Map file parser.
//!
//! # Format
//!
//! ```text
//! # comment
//! ~A: Archive, 3
//! ~B: Bank, 2
//! M
//! 1  *A
//!  ** B
//! 2    
//! ```
//!
//! | Line            | Meaning                                              |
//! |-----------------|------------------------------------------------------|
//! | `#…`            | comment                                              |
//! | `~K: name, h`   | landmark category `K` with display name and height   |
//! | `M…`            | map starts on the next line                          |
//!
//! Map rows, top to bottom:
//!
//! | Character | Cell                                              |
//! |-----------|---------------------------------------------------|
//! | space     | empty                                             |
//! | `0`–`9`   | home of agents whose number ends in that digit    |
//! | `*`       | unimportant building                              |
//! | other     | landmark described by a `~` record                |
//!
//! Every row must be as wide as the first.  Empty lines after the last row
//! are ignored.

use std::collections::HashMap;

use lm_core::GridPos;
use lm_grid::{Building, Grid, GridBuilder};

use crate::{ScenarioError, ScenarioResult};

/// Display name and height registered by a `~` record.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Description {
    name:   String,
    height: u32,
}

/// Parse a complete map file.
pub fn parse_map(text: &str) -> ScenarioResult<Grid> {
    let lines: Vec<&str> = text.lines().collect();

    // ── Header ────────────────────────────────────────────────────────────
    let mut descriptions: HashMap<char, Description> = HashMap::new();
    let mut map_start = None;

    for (i, line) in lines.iter().enumerate() {
        let Some(first) = line.chars().next() else {
            continue;
        };
        match first {
            '#' => {}
            '~' => {
                let (key, description) = parse_description(line, i + 1)?;
                descriptions.insert(key, description);
            }
            'M' => {
                map_start = Some(i + 1);
                break;
            }
            _ if line.trim().is_empty() => {}
            _ => {
                return Err(ScenarioError::Parse {
                    line:    i + 1,
                    message: format!("unexpected line {line:?} before the map"),
                });
            }
        }
    }
    let start = map_start.ok_or(ScenarioError::MissingMap)?;

    // ── Rows ──────────────────────────────────────────────────────────────
    let mut rows = &lines[start..];
    while let Some((last, rest)) = rows.split_last() {
        if !last.is_empty() {
            break;
        }
        rows = rest;
    }

    let columns = rows.first().map_or(0, |r| r.chars().count()) as u32;
    let mut builder = GridBuilder::new(columns, rows.len() as u32)?;

    for (y, row) in rows.iter().enumerate() {
        let y = y as u32;
        let found = row.chars().count() as u32;
        if found != columns {
            return Err(ScenarioError::NonRectangular { row: y, expected: columns, found });
        }
        for (x, ch) in row.chars().enumerate() {
            let pos = GridPos::new(x as u32, y);
            let building = match ch {
                ' ' => continue,
                '0'..='9' => Building::home(ch, pos),
                Building::OBSTACLE => Building::obstacle(pos),
                _ => {
                    let d = descriptions
                        .get(&ch)
                        .ok_or(ScenarioError::UndescribedBuilding { ch, column: pos.x, row: y })?;
                    Building::landmark(d.name.clone(), ch, d.height, pos)
                }
            };
            builder.add_building(building)?;
        }
    }

    Ok(builder.build())
}

/// `~K: name, height` → `(K, Description)`.
fn parse_description(line: &str, number: usize) -> ScenarioResult<(char, Description)> {
    let err = |message: &str| ScenarioError::Parse { line: number, message: message.to_owned() };

    let mut chars = line.chars().skip(1);
    let key = chars.next().ok_or_else(|| err("missing category after `~`"))?;
    let rest: String = chars.collect();

    let (_, body) = rest.split_once(':').ok_or_else(|| err("expected `:` after the category"))?;
    let (name, height) = body
        .rsplit_once(',')
        .ok_or_else(|| err("expected `, height` after the name"))?;
    let height = height
        .trim()
        .parse::<u32>()
        .map_err(|e| err(&format!("invalid height {:?}: {e}", height.trim())))?;

    Ok((key, Description { name: name.trim().to_owned(), height }))
}
