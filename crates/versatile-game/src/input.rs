//! Input system with action-based mapping
//!
//! Provides an abstraction layer between raw input events and character
//! actions.

use std::collections::{HashMap, HashSet};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use winit::event::{ElementState, MouseButton, MouseScrollDelta, TouchPhase};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Character actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    /// Move forward (W by default)
    MoveForward,
    /// Move backward (S by default)
    MoveBackward,
    /// Move left (A by default)
    MoveLeft,
    /// Move right (D by default)
    MoveRight,
    /// Jump (Space by default)
    Jump,
    /// Turn left at the base turn rate (Q by default)
    TurnLeft,
    /// Turn right at the base turn rate (E by default)
    TurnRight,
    /// Look up at the base look rate (Page Up by default)
    LookUp,
    /// Look down at the base look rate (Page Down by default)
    LookDown,
    /// Cycle to the next camera mode (C by default)
    CycleCamera,
    /// Swing the smooth follow camera behind the character (R by default)
    ResetCamera,
    /// Zoom in (scroll up)
    ZoomIn,
    /// Zoom out (scroll down)
    ZoomOut,
}

/// Current state of all inputs for a frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Actions currently held down
    pub held: HashSet<InputAction>,
    /// Actions that were just pressed this frame
    pub just_pressed: HashSet<InputAction>,
    /// Actions that were just released this frame
    pub just_released: HashSet<InputAction>,
    /// Mouse movement delta for this frame
    pub mouse_delta: Vec2,
    /// Scroll wheel delta for this frame
    pub scroll_delta: f32,
    /// Whether the cursor is captured (invisible, locked)
    pub cursor_captured: bool,
    /// Analog movement stick (x = forward, y = right)
    pub move_stick: Vec2,
    /// Analog look stick as a rate (x = turn, y = look up)
    pub look_stick: Vec2,
    /// A touch began this frame
    pub touch_started: bool,
    /// A touch ended this frame
    pub touch_stopped: bool,
}

impl InputState {
    /// Create a new empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently held
    pub fn is_held(&self, action: InputAction) -> bool {
        self.held.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn is_just_pressed(&self, action: InputAction) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this frame
    pub fn is_just_released(&self, action: InputAction) -> bool {
        self.just_released.contains(&action)
    }

    /// -1, 0 or 1 from a pair of opposing held actions
    fn digital_axis(&self, positive: InputAction, negative: InputAction) -> f32 {
        let mut axis = 0.0;
        if self.is_held(positive) {
            axis += 1.0;
        }
        if self.is_held(negative) {
            axis -= 1.0;
        }
        axis
    }

    /// Forward/backward movement axis in [-1, 1]
    pub fn forward_axis(&self) -> f32 {
        (self.digital_axis(InputAction::MoveForward, InputAction::MoveBackward) + self.move_stick.x)
            .clamp(-1.0, 1.0)
    }

    /// Right/left movement axis in [-1, 1]
    pub fn right_axis(&self) -> f32 {
        (self.digital_axis(InputAction::MoveRight, InputAction::MoveLeft) + self.move_stick.y)
            .clamp(-1.0, 1.0)
    }

    /// Normalized turn rate in [-1, 1]
    pub fn turn_rate_axis(&self) -> f32 {
        (self.digital_axis(InputAction::TurnRight, InputAction::TurnLeft) + self.look_stick.x)
            .clamp(-1.0, 1.0)
    }

    /// Normalized look-up rate in [-1, 1]
    pub fn look_up_rate_axis(&self) -> f32 {
        (self.digital_axis(InputAction::LookUp, InputAction::LookDown) + self.look_stick.y)
            .clamp(-1.0, 1.0)
    }

    /// Clear frame-specific data (call at end of frame)
    pub fn clear_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
        self.mouse_delta = Vec2::ZERO;
        self.scroll_delta = 0.0;
        self.touch_started = false;
        self.touch_stopped = false;
    }

    /// Clear all input state
    pub fn clear_all(&mut self) {
        self.clear_frame();
        self.held.clear();
        self.move_stick = Vec2::ZERO;
        self.look_stick = Vec2::ZERO;
    }
}

/// Binding of a physical key to an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputBinding {
    /// Keyboard key
    Key(KeyCode),
    /// Mouse button
    Mouse(u32), // 0 = left, 1 = right, 2 = middle
}

impl From<KeyCode> for InputBinding {
    fn from(key: KeyCode) -> Self {
        Self::Key(key)
    }
}

/// Maps physical inputs to character actions
#[derive(Debug, Clone)]
pub struct InputBindings {
    /// Key/button to action mappings
    bindings: HashMap<InputBinding, InputAction>,
    /// Reverse lookup: action to all bindings
    reverse: HashMap<InputAction, Vec<InputBinding>>,
}

impl Default for InputBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
            reverse: HashMap::new(),
        };

        // Default WASD bindings
        bindings.bind(KeyCode::KeyW, InputAction::MoveForward);
        bindings.bind(KeyCode::KeyS, InputAction::MoveBackward);
        bindings.bind(KeyCode::KeyA, InputAction::MoveLeft);
        bindings.bind(KeyCode::KeyD, InputAction::MoveRight);

        // Arrow keys as alternative
        bindings.bind(KeyCode::ArrowUp, InputAction::MoveForward);
        bindings.bind(KeyCode::ArrowDown, InputAction::MoveBackward);
        bindings.bind(KeyCode::ArrowLeft, InputAction::MoveLeft);
        bindings.bind(KeyCode::ArrowRight, InputAction::MoveRight);

        bindings.bind(KeyCode::Space, InputAction::Jump);

        // Keyboard turning
        bindings.bind(KeyCode::KeyQ, InputAction::TurnLeft);
        bindings.bind(KeyCode::KeyE, InputAction::TurnRight);
        bindings.bind(KeyCode::PageUp, InputAction::LookUp);
        bindings.bind(KeyCode::PageDown, InputAction::LookDown);

        // Camera
        bindings.bind(KeyCode::KeyC, InputAction::CycleCamera);
        bindings.bind(KeyCode::KeyR, InputAction::ResetCamera);
        bindings.bind_mouse(2, InputAction::ResetCamera); // Middle mouse button

        bindings
    }
}

impl InputBindings {
    /// Create new input bindings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a key to an action
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        self.insert(InputBinding::Key(key), action);
    }

    /// Bind a mouse button to an action
    pub fn bind_mouse(&mut self, button: u32, action: InputAction) {
        self.insert(InputBinding::Mouse(button), action);
    }

    fn insert(&mut self, binding: InputBinding, action: InputAction) {
        if let Some(previous) = self.bindings.insert(binding, action) {
            if let Some(bindings) = self.reverse.get_mut(&previous) {
                bindings.retain(|b| *b != binding);
            }
        }
        self.reverse.entry(action).or_default().push(binding);
    }

    /// Unbind a key
    pub fn unbind(&mut self, key: KeyCode) {
        let binding = InputBinding::Key(key);
        if let Some(action) = self.bindings.remove(&binding) {
            if let Some(bindings) = self.reverse.get_mut(&action) {
                bindings.retain(|b| *b != binding);
            }
        }
    }

    /// Get the action for a binding, if any
    pub fn get_action(&self, binding: &InputBinding) -> Option<InputAction> {
        self.bindings.get(binding).copied()
    }

    /// Get the action for a key, if any
    pub fn get_key_action(&self, key: KeyCode) -> Option<InputAction> {
        self.get_action(&InputBinding::Key(key))
    }

    /// All bindings that trigger an action
    pub fn bindings_for(&self, action: InputAction) -> &[InputBinding] {
        self.reverse.get(&action).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Input handler that processes raw events and updates state
#[derive(Debug)]
pub struct InputHandler {
    /// Current input state
    pub state: InputState,
    /// Input bindings
    pub bindings: InputBindings,
    /// Mouse sensitivity multiplier
    pub mouse_sensitivity: f32,
    /// Invert Y axis
    pub invert_y: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Create a new input handler with default bindings
    pub fn new() -> Self {
        Self {
            state: InputState::new(),
            bindings: InputBindings::default(),
            mouse_sensitivity: 1.0,
            invert_y: false,
        }
    }

    fn apply(&mut self, action: InputAction, element_state: ElementState) {
        match element_state {
            ElementState::Pressed => {
                if !self.state.held.contains(&action) {
                    self.state.just_pressed.insert(action);
                }
                self.state.held.insert(action);
            }
            ElementState::Released => {
                self.state.held.remove(&action);
                self.state.just_released.insert(action);
            }
        }
    }

    /// Handle a keyboard event
    pub fn handle_keyboard(&mut self, physical_key: PhysicalKey, element_state: ElementState) {
        if let PhysicalKey::Code(key_code) = physical_key {
            if let Some(action) = self.bindings.get_key_action(key_code) {
                self.apply(action, element_state);
            }
        }
    }

    /// Handle a mouse button event
    pub fn handle_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let button_id = match button {
            MouseButton::Left => 0,
            MouseButton::Right => 1,
            MouseButton::Middle => 2,
            MouseButton::Back => 3,
            MouseButton::Forward => 4,
            MouseButton::Other(id) => id as u32,
        };

        if let Some(action) = self.bindings.get_action(&InputBinding::Mouse(button_id)) {
            self.apply(action, state);
        }
    }

    /// Handle mouse movement
    pub fn handle_mouse_motion(&mut self, delta: (f64, f64)) {
        if self.state.cursor_captured {
            let y_mult = if self.invert_y { -1.0 } else { 1.0 };
            self.state.mouse_delta += Vec2::new(
                delta.0 as f32 * self.mouse_sensitivity,
                delta.1 as f32 * self.mouse_sensitivity * y_mult,
            );
        }
    }

    /// Handle scroll wheel
    pub fn handle_scroll(&mut self, delta: MouseScrollDelta) {
        let scroll = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 120.0,
        };

        self.state.scroll_delta += scroll;

        // Also trigger zoom actions
        if scroll > 0.0 {
            self.state.just_pressed.insert(InputAction::ZoomIn);
        } else if scroll < 0.0 {
            self.state.just_pressed.insert(InputAction::ZoomOut);
        }
    }

    /// Handle a touch event
    pub fn handle_touch(&mut self, phase: TouchPhase) {
        match phase {
            TouchPhase::Started => self.state.touch_started = true,
            TouchPhase::Ended | TouchPhase::Cancelled => self.state.touch_stopped = true,
            TouchPhase::Moved => {}
        }
    }

    /// Clear frame-specific input data
    pub fn end_frame(&mut self) {
        self.state.clear_frame();
    }

    /// Set cursor capture state
    pub fn set_cursor_captured(&mut self, captured: bool) {
        self.state.cursor_captured = captured;
    }
}
