//! Camera modes and the presentation each one requires

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CameraError;

/// Camera mode, in cycling order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CameraMode {
    /// Free orbit camera on a boom behind the character
    #[default]
    ThirdPersonDefault,
    /// Camera at the eyes, arms mesh shown
    FirstPerson,
    /// Boom camera that swings behind the direction of travel
    ThirdPersonSmoothFollow,
    /// Fixed short boom over the shoulder
    ThirdPersonOverShoulder,
}

impl CameraMode {
    /// All modes in cycling order
    pub const ALL: [CameraMode; 4] = [
        CameraMode::ThirdPersonDefault,
        CameraMode::FirstPerson,
        CameraMode::ThirdPersonSmoothFollow,
        CameraMode::ThirdPersonOverShoulder,
    ];

    /// Position of this mode in cycling order
    pub fn index(self) -> u8 {
        match self {
            CameraMode::ThirdPersonDefault => 0,
            CameraMode::FirstPerson => 1,
            CameraMode::ThirdPersonSmoothFollow => 2,
            CameraMode::ThirdPersonOverShoulder => 3,
        }
    }

    /// The mode after this one, wrapping to `ThirdPersonDefault`
    pub fn next(self) -> Self {
        let next = (self.index() as usize + 1) % Self::ALL.len();
        Self::ALL[next]
    }

    /// Human-readable name
    pub fn display_name(self) -> &'static str {
        match self {
            CameraMode::ThirdPersonDefault => "Third Person (Default)",
            CameraMode::FirstPerson => "First Person",
            CameraMode::ThirdPersonSmoothFollow => "Third Person Smooth Follow",
            CameraMode::ThirdPersonOverShoulder => "Third Person Over Shoulder",
        }
    }

    /// Check if in first-person mode
    pub fn is_first_person(self) -> bool {
        matches!(self, CameraMode::FirstPerson)
    }

    /// Check if in any third-person mode
    pub fn is_third_person(self) -> bool {
        !self.is_first_person()
    }
}

impl TryFrom<u8> for CameraMode {
    type Error = CameraError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(CameraError::InvalidMode(index))
    }
}

impl fmt::Display for CameraMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The three cameras attached to the character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActiveCamera {
    Follow,
    FirstPerson,
    OverShoulder,
}

impl ActiveCamera {
    pub const ALL: [ActiveCamera; 3] = [
        ActiveCamera::Follow,
        ActiveCamera::FirstPerson,
        ActiveCamera::OverShoulder,
    ];
}

/// Everything a mode switch changes on the character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeEffects {
    /// Body turns toward the direction of movement
    pub orient_rotation_to_movement: bool,
    /// First-person arms visible
    pub arms_visible: bool,
    /// Body hidden from its owner
    pub body_owner_no_see: bool,
    /// The single camera to activate
    pub camera: ActiveCamera,
    /// Whether entering the mode cancels an in-progress reset
    pub clears_reset: bool,
}

/// Side-effect table for a mode
pub fn side_effects_for(mode: CameraMode) -> ModeEffects {
    match mode {
        CameraMode::ThirdPersonDefault => ModeEffects {
            orient_rotation_to_movement: true,
            arms_visible: false,
            body_owner_no_see: false,
            camera: ActiveCamera::Follow,
            clears_reset: true,
        },
        CameraMode::FirstPerson => ModeEffects {
            orient_rotation_to_movement: false,
            arms_visible: true,
            body_owner_no_see: true,
            camera: ActiveCamera::FirstPerson,
            clears_reset: true,
        },
        CameraMode::ThirdPersonSmoothFollow => ModeEffects {
            orient_rotation_to_movement: true,
            arms_visible: false,
            body_owner_no_see: false,
            camera: ActiveCamera::Follow,
            clears_reset: false,
        },
        CameraMode::ThirdPersonOverShoulder => ModeEffects {
            orient_rotation_to_movement: false,
            arms_visible: false,
            body_owner_no_see: false,
            camera: ActiveCamera::OverShoulder,
            clears_reset: true,
        },
    }
}
