//! Outbound intents consumed by the presentation layer.
//!
//! Events describe what changed, never how to draw it. Texts are sent as
//! localization keys plus substitution parameters.

use crate::game::door::{DoorIndex, DOOR_COUNT};
use crate::game::round::Generation;
use crate::game::state::GameState;
use serde::{Deserialize, Serialize};

/// Localization key of the instruction line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InstructionKey {
    Begin,
    SelectFirstDoor,
    EliminateDoor,
    ShowFinalSelection,
    Win,
    Lose,
}

impl InstructionKey {
    /// Resource key of the text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Begin => "begin",
            Self::SelectFirstDoor => "selectFirstDoor",
            Self::EliminateDoor => "eliminateDoor",
            Self::ShowFinalSelection => "showFinalSelection",
            Self::Win => "win",
            Self::Lose => "lose",
        }
    }
}

/// A `{name}` placeholder and its replacement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextParam {
    pub name: String,
    pub value: String,
}

impl TextParam {
    /// Placeholder filled with a one-based door number.
    pub fn door(name: &str, door: DoorIndex) -> Self {
        Self {
            name: name.to_string(),
            value: door.number().to_string(),
        }
    }
}

/// Label of the continue button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContinueLabel {
    Continue,
    Restart,
}

/// Which controls the presentation layer should enable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub doors: [bool; DOOR_COUNT],
    pub continue_enabled: bool,
    pub continue_label: ContinueLabel,
}

impl Controls {
    /// Everything disabled.
    pub fn locked() -> Self {
        Self {
            doors: [false; DOOR_COUNT],
            continue_enabled: false,
            continue_label: ContinueLabel::Continue,
        }
    }

    /// Doors open for the first pick.
    pub fn choosing() -> Self {
        Self {
            doors: [true; DOOR_COUNT],
            ..Self::locked()
        }
    }

    /// Only the continue button.
    pub fn confirm(label: ContinueLabel) -> Self {
        Self {
            continue_enabled: true,
            continue_label: label,
            ..Self::locked()
        }
    }

    /// Every door except the eliminated one.
    pub fn switching(eliminated: DoorIndex) -> Self {
        let mut doors = [true; DOOR_COUNT];
        doors[eliminated.get()] = false;
        Self {
            doors,
            ..Self::locked()
        }
    }

    /// Whether `door` accepts a click.
    pub fn door_enabled(&self, door: DoorIndex) -> bool {
        self.doors[door.get()]
    }
}

/// Everything the machine tells the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new round started; reset all door visuals.
    RoundReset {
        door_count: usize,
        generation: Generation,
    },
    /// Play the reveal of `index`, then report back with `generation`.
    DoorEliminated {
        index: DoorIndex,
        generation: Generation,
    },
    FinalSelectionShown {
        selected: DoorIndex,
    },
    ResultsRevealed {
        prize: DoorIndex,
        selected: DoorIndex,
    },
    Verdict {
        won: bool,
    },
    InstructionTextChanged {
        key: InstructionKey,
        params: Vec<TextParam>,
    },
    ControlsChanged(Controls),
    /// A session was restored from a checkpoint.
    Resumed {
        state: GameState,
        generation: Generation,
    },
}

impl GameEvent {
    /// Instruction text without parameters.
    pub fn instruction(key: InstructionKey) -> Self {
        Self::InstructionTextChanged {
            key,
            params: Vec::new(),
        }
    }

    /// Instruction text with one door parameter, shown 1-based.
    pub fn instruction_with_door(key: InstructionKey, name: &str, door: DoorIndex) -> Self {
        Self::InstructionTextChanged {
            key,
            params: vec![TextParam::door(name, door)],
        }
    }
}
