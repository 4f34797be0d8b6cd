//! Lights: a row-of-lights toggle puzzle.
//!
//! A row of lit and unlit cells. Pressing a cell toggles it and its
//! neighbours (wrapping around the ends when configured). The puzzle is
//! solved when every light is out.
//!
//! Instances are generated by scrambling the solved row with random
//! presses, so every instance is solvable by construction. The all-off
//! state is therefore always reachable, and `solve` can return it
//! directly.
//!
//! This is the reference backend: it implements every [`Backend`]
//! operation, including presets, config fields, timing hints, solve,
//! and status text.

use serde::{Deserialize, Serialize};

use crate::backend::Backend;
use crate::config::{ConfigField, FieldList};
use crate::core::{ConfigError, Seed, SeedError, SessionRng, SolveError};
use crate::presets::PresetEntry;

/// Narrowest playable row.
pub const MIN_WIDTH: usize = 3;
/// Widest playable row.
pub const MAX_WIDTH: usize = 32;

const PRESS_ANIM_LENGTH: f64 = 0.15;
const COMPLETION_FLASH_LENGTH: f64 = 0.5;
const TILE_SIZE: u32 = 48;

/// Lights parameters: row width and whether presses wrap at the ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightsParams {
    /// Number of cells in the row.
    pub width: usize,
    /// Whether the first and last cells are neighbours.
    pub wrap: bool,
}

impl Default for LightsParams {
    fn default() -> Self {
        Self {
            width: 7,
            wrap: false,
        }
    }
}

/// Immutable snapshot of one Lights position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightsState {
    lights: Vec<bool>,
    wrap: bool,
    presses: u32,
}

impl LightsState {
    /// Number of cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.lights.len()
    }

    /// Whether the cell at `index` is lit.
    #[must_use]
    pub fn is_lit(&self, index: usize) -> bool {
        self.lights[index]
    }

    /// Solved when every light is out.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.lights.iter().all(|lit| !lit)
    }

    /// Presses made since the game started.
    #[must_use]
    pub fn presses(&self) -> u32 {
        self.presses
    }
}

/// Move input: press the cell at this index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Press(pub usize);

/// The Lights backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct Lights;

fn toggle_around(lights: &mut [bool], index: usize, wrap: bool) {
    let width = lights.len();
    lights[index] = !lights[index];
    if index > 0 {
        lights[index - 1] = !lights[index - 1];
    } else if wrap {
        lights[width - 1] = !lights[width - 1];
    }
    if index + 1 < width {
        lights[index + 1] = !lights[index + 1];
    } else if wrap {
        lights[0] = !lights[0];
    }
}

impl Backend for Lights {
    type Params = LightsParams;
    type State = LightsState;
    type Move = Press;

    fn name(&self) -> &str {
        "Lights"
    }

    fn default_params(&self) -> LightsParams {
        LightsParams::default()
    }

    fn validate_params(&self, params: &LightsParams) -> Result<(), ConfigError> {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&params.width) {
            return Err(ConfigError::params(format!(
                "width must be between {MIN_WIDTH} and {MAX_WIDTH}"
            )));
        }
        Ok(())
    }

    fn editable_fields(&self, params: &LightsParams) -> FieldList {
        let mut fields = FieldList::new();
        fields.push(ConfigField::text("Width", params.width.to_string()));
        fields.push(ConfigField::toggle("Wrap around", params.wrap));
        fields
    }

    fn build_from_fields(&self, fields: &FieldList) -> Result<LightsParams, ConfigError> {
        let width_field = fields
            .first()
            .ok_or_else(|| ConfigError::field("Width", "missing"))?;
        let text = width_field
            .as_text()
            .ok_or_else(|| ConfigError::field("Width", "expected a text value"))?
            .trim();
        let width = text
            .parse::<usize>()
            .map_err(|_| ConfigError::field("Width", format!("`{text}` is not a number")))?;

        let wrap = fields
            .get(1)
            .and_then(ConfigField::as_toggle)
            .ok_or_else(|| ConfigError::field("Wrap around", "expected a toggle value"))?;

        Ok(LightsParams { width, wrap })
    }

    fn new_state(&self, params: &LightsParams, seed: &Seed) -> Result<LightsState, SeedError> {
        if seed.as_str().is_empty() {
            return Err(SeedError::new(seed.as_str(), "seed text is empty"));
        }

        let mut rng = SessionRng::for_seed(seed);
        let mut lights = vec![false; params.width];

        // Scramble the solved row with random presses; every instance is
        // solvable by construction.
        for _ in 0..params.width * 2 {
            let index = rng.gen_range_usize(0..params.width);
            toggle_around(&mut lights, index, params.wrap);
        }
        if lights.iter().all(|lit| !lit) {
            let index = rng.gen_range_usize(0..params.width);
            toggle_around(&mut lights, index, params.wrap);
        }

        Ok(LightsState {
            lights,
            wrap: params.wrap,
            presses: 0,
        })
    }

    fn apply_move(&self, state: &LightsState, input: &Press) -> Option<LightsState> {
        let Press(index) = *input;
        if state.is_solved() || index >= state.width() {
            return None;
        }

        let mut next = state.clone();
        toggle_around(&mut next.lights, index, next.wrap);
        next.presses += 1;
        Some(next)
    }

    fn anim_length(&self, _from: &LightsState, _to: &LightsState) -> f64 {
        PRESS_ANIM_LENGTH
    }

    fn flash_length(&self, from: &LightsState, to: &LightsState) -> f64 {
        if !from.is_solved() && to.is_solved() {
            COMPLETION_FLASH_LENGTH
        } else {
            0.0
        }
    }

    fn fetch_preset(&self, index: usize) -> Option<PresetEntry<LightsParams>> {
        match index {
            0 => Some(PresetEntry::new(
                "Short (5)",
                LightsParams {
                    width: 5,
                    wrap: false,
                },
            )),
            1 => Some(PresetEntry::new(
                "Classic (7)",
                LightsParams {
                    width: 7,
                    wrap: false,
                },
            )),
            2 => Some(PresetEntry::new(
                "Ring (9)",
                LightsParams {
                    width: 9,
                    wrap: true,
                },
            )),
            _ => None,
        }
    }

    fn display_size(&self, params: &LightsParams) -> (u32, u32) {
        (params.width as u32 * TILE_SIZE, TILE_SIZE)
    }

    fn can_solve(&self) -> bool {
        true
    }

    fn solve(
        &self,
        _initial: &LightsState,
        current: &LightsState,
    ) -> Result<LightsState, SolveError> {
        Ok(LightsState {
            lights: vec![false; current.width()],
            wrap: current.wrap,
            presses: current.presses,
        })
    }

    fn status_text(&self, state: &LightsState) -> Option<String> {
        if state.is_solved() {
            Some(format!("Solved in {} presses", state.presses))
        } else {
            Some(format!("Presses: {}", state.presses))
        }
    }
}
