use serde::{Deserialize, Serialize};

/// Cell every new player spawns on.
pub const SPAWN_X: usize = 1;
pub const SPAWN_Y: usize = 1;

/// The closed set of tile kinds a world cell can hold.
///
/// The two capability flags decide everything the movement rules need to
/// know about a cell: whether it blocks entry and whether a push or pull can
/// displace it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Floor,
    Wall,
    Box,
}

impl Tile {
    /// Whether this tile blocks entry.
    pub fn solid(self) -> bool {
        match self {
            Tile::Floor => false,
            Tile::Wall => true,
            Tile::Box => true,
        }
    }

    /// Whether a push or pull can displace this tile.
    pub fn movable(self) -> bool {
        match self {
            Tile::Floor => false,
            Tile::Wall => false,
            Tile::Box => true,
        }
    }

    /// Index used on the wire and in stored world layouts.
    pub fn index(self) -> u8 {
        match self {
            Tile::Floor => 0,
            Tile::Wall => 1,
            Tile::Box => 2,
        }
    }

    pub fn from_index(index: u8) -> Option<Tile> {
        match index {
            0 => Some(Tile::Floor),
            1 => Some(Tile::Wall),
            2 => Some(Tile::Box),
            _ => None,
        }
    }
}

/// Grid axis a push acts along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// One of the five vectors a player's facing or pulling slot can hold.
///
/// At most one axis is non-zero and that axis is exactly ±1; anything else
/// is unrepresentable by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepVec {
    #[default]
    Zero,
    PlusX,
    MinusX,
    PlusY,
    MinusY,
}

impl StepVec {
    pub fn from_axis(axis: Axis, positive: bool) -> StepVec {
        match (axis, positive) {
            (Axis::X, true) => StepVec::PlusX,
            (Axis::X, false) => StepVec::MinusX,
            (Axis::Y, true) => StepVec::PlusY,
            (Axis::Y, false) => StepVec::MinusY,
        }
    }

    pub fn dx(self) -> i32 {
        match self {
            StepVec::PlusX => 1,
            StepVec::MinusX => -1,
            _ => 0,
        }
    }

    pub fn dy(self) -> i32 {
        match self {
            StepVec::PlusY => 1,
            StepVec::MinusY => -1,
            _ => 0,
        }
    }

    pub fn reversed(self) -> StepVec {
        match self {
            StepVec::Zero => StepVec::Zero,
            StepVec::PlusX => StepVec::MinusX,
            StepVec::MinusX => StepVec::PlusX,
            StepVec::PlusY => StepVec::MinusY,
            StepVec::MinusY => StepVec::PlusY,
        }
    }

    pub fn is_zero(self) -> bool {
        self == StepVec::Zero
    }
}

/// Plain `{x, y}` pair as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl From<StepVec> for Offset {
    fn from(step: StepVec) -> Offset {
        Offset {
            x: step.dx(),
            y: step.dy(),
        }
    }
}

/// Inbound client message, decoded once at the connection boundary.
///
/// Anything that fails to match a variant — unknown action tag, unknown
/// axis, missing fields — is discarded there and never reaches the
/// simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ClientAction {
    Push {
        #[serde(rename = "directionAxis")]
        direction_axis: Axis,
        #[serde(rename = "directionStep")]
        direction_step: f64,
    },
    Pull,
}

/// Public attributes of one player as broadcast to every client.
///
/// The identity-channel binding never appears here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub color: String,
    pub direction: Offset,
    pub position: Offset,
    pub pulling: Offset,
}

/// Full authoritative state, sent as one snapshot on every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub world: Vec<Vec<u8>>,
    pub players: Vec<PlayerView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_capabilities() {
        assert!(!Tile::Floor.solid());
        assert!(!Tile::Floor.movable());
        assert!(Tile::Wall.solid());
        assert!(!Tile::Wall.movable());
        assert!(Tile::Box.solid());
        assert!(Tile::Box.movable());
    }

    #[test]
    fn test_tile_index_roundtrip() {
        for tile in [Tile::Floor, Tile::Wall, Tile::Box] {
            assert_eq!(Tile::from_index(tile.index()), Some(tile));
        }
        assert_eq!(Tile::from_index(3), None);
        assert_eq!(Tile::from_index(255), None);
    }

    #[test]
    fn test_step_vec_single_axis_unit_magnitude() {
        let all = [
            StepVec::Zero,
            StepVec::PlusX,
            StepVec::MinusX,
            StepVec::PlusY,
            StepVec::MinusY,
        ];

        for step in all {
            let non_zero_axes = [step.dx(), step.dy()]
                .iter()
                .filter(|component| **component != 0)
                .count();
            assert!(non_zero_axes <= 1);
            assert!(step.dx().abs() <= 1);
            assert!(step.dy().abs() <= 1);
        }
    }

    #[test]
    fn test_step_vec_from_axis() {
        assert_eq!(StepVec::from_axis(Axis::X, true), StepVec::PlusX);
        assert_eq!(StepVec::from_axis(Axis::X, false), StepVec::MinusX);
        assert_eq!(StepVec::from_axis(Axis::Y, true), StepVec::PlusY);
        assert_eq!(StepVec::from_axis(Axis::Y, false), StepVec::MinusY);
    }

    #[test]
    fn test_step_vec_reversed() {
        assert_eq!(StepVec::PlusX.reversed(), StepVec::MinusX);
        assert_eq!(StepVec::MinusY.reversed(), StepVec::PlusY);
        assert_eq!(StepVec::Zero.reversed(), StepVec::Zero);
        for step in [StepVec::PlusX, StepVec::MinusX, StepVec::PlusY, StepVec::MinusY] {
            assert_eq!(step.reversed().reversed(), step);
        }
    }

    #[test]
    fn test_offset_from_step_vec() {
        assert_eq!(Offset::from(StepVec::Zero), Offset { x: 0, y: 0 });
        assert_eq!(Offset::from(StepVec::PlusX), Offset { x: 1, y: 0 });
        assert_eq!(Offset::from(StepVec::MinusY), Offset { x: 0, y: -1 });
    }

    #[test]
    fn test_decode_push_action() {
        let action: ClientAction =
            serde_json::from_str(r#"{"action":"push","directionAxis":"x","directionStep":1}"#)
                .unwrap();
        assert_eq!(
            action,
            ClientAction::Push {
                direction_axis: Axis::X,
                direction_step: 1.0,
            }
        );

        let action: ClientAction =
            serde_json::from_str(r#"{"action":"push","directionAxis":"y","directionStep":-1}"#)
                .unwrap();
        assert_eq!(
            action,
            ClientAction::Push {
                direction_axis: Axis::Y,
                direction_step: -1.0,
            }
        );
    }

    #[test]
    fn test_decode_pull_action() {
        let action: ClientAction = serde_json::from_str(r#"{"action":"pull"}"#).unwrap();
        assert_eq!(action, ClientAction::Pull);
    }

    #[test]
    fn test_decode_rejects_unknown_shapes() {
        // Unknown action tag
        assert!(serde_json::from_str::<ClientAction>(r#"{"action":"teleport"}"#).is_err());
        // Unknown axis
        assert!(serde_json::from_str::<ClientAction>(
            r#"{"action":"push","directionAxis":"z","directionStep":1}"#
        )
        .is_err());
        // Missing fields
        assert!(serde_json::from_str::<ClientAction>(r#"{"action":"push"}"#).is_err());
        // Not an object
        assert!(serde_json::from_str::<ClientAction>(r#""push""#).is_err());
    }

    #[test]
    fn test_snapshot_wire_shape() {
        let snapshot = StateSnapshot {
            world: vec![vec![0, 1], vec![2, 0]],
            players: vec![PlayerView {
                color: "#ff00aa".to_string(),
                direction: Offset { x: 1, y: 0 },
                position: Offset { x: 2, y: 1 },
                pulling: Offset { x: 0, y: 0 },
            }],
        };

        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&snapshot).unwrap()).unwrap();

        assert_eq!(value["world"][1][0], 2);
        assert_eq!(value["players"][0]["color"], "#ff00aa");
        assert_eq!(value["players"][0]["direction"]["x"], 1);
        assert_eq!(value["players"][0]["position"]["y"], 1);
        assert_eq!(value["players"][0]["pulling"]["x"], 0);
        // The channel binding must never leak into the broadcast payload.
        assert!(value["players"][0].get("id").is_none());
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let snapshot = StateSnapshot {
            world: vec![vec![0; 4]; 4],
            players: vec![],
        };
        let decoded: StateSnapshot =
            serde_json::from_str(&serde_json::to_string(&snapshot).unwrap()).unwrap();
        assert_eq!(decoded, snapshot);
    }
}
