//! Binding commands and their compact display codes.
//!
//! A binding is one behavior reference (`&kp`, `&mo`, ...) plus the parameter
//! tokens that follow it in a `bindings` property. Known behaviors render to a
//! short code such as `MO(1)`; everything else degrades to a readable
//! space-joined form, so formatting never fails.

use crate::constants::SIGIL;

/// Firmware behaviors with a dedicated display format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// `&kp KEY` - plain key press
    KeyPress,
    /// `&mo LAYER` - layer active while held
    MomentaryLayer,
    /// `&tog LAYER` - toggle layer on/off
    ToggleLayer,
    /// `&mt MOD KEY` - modifier on hold, key on tap
    ModTap,
    /// `&out TARGET` - output selection (USB/BLE)
    OutputSelect,
    /// `&bt CMD ARG` - bluetooth profile command
    Bluetooth,
    /// `&trans` - falls through to the layer below
    Transparent,
}

impl Behavior {
    /// Looks up a behavior by its sigil-prefixed name.
    ///
    /// The match is exact and case-sensitive: `&KP` is not `&kp`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "&kp" => Some(Self::KeyPress),
            "&mo" => Some(Self::MomentaryLayer),
            "&tog" => Some(Self::ToggleLayer),
            "&mt" => Some(Self::ModTap),
            "&out" => Some(Self::OutputSelect),
            "&bt" => Some(Self::Bluetooth),
            "&trans" => Some(Self::Transparent),
            _ => None,
        }
    }

    /// Number of parameters the display format needs.
    #[must_use]
    pub const fn required_params(self) -> usize {
        match self {
            Self::Transparent => 0,
            Self::KeyPress | Self::MomentaryLayer | Self::ToggleLayer | Self::OutputSelect => 1,
            Self::ModTap | Self::Bluetooth => 2,
        }
    }

    /// Renders the display code. `params` must hold at least
    /// [`required_params`](Self::required_params) entries; extra entries are ignored.
    fn render(self, params: &[String]) -> String {
        match self {
            Self::KeyPress => params[0].clone(),
            Self::MomentaryLayer => format!("MO({})", params[0]),
            Self::ToggleLayer => format!("TOG({})", params[0]),
            Self::ModTap => format!("MT({},{})", params[0], params[1]),
            Self::OutputSelect => format!("OUT({})", params[0]),
            Self::Bluetooth => format!("BT({},{})", params[0], params[1]),
            Self::Transparent => "TRNS".to_string(),
        }
    }
}

/// A single binding command: behavior token plus its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Behavior token including the sigil (e.g., "&kp")
    pub behavior: String,
    /// Parameter tokens in source order
    pub params: Vec<String>,
}

impl Binding {
    /// Creates a binding with no parameters yet.
    pub fn new(behavior: impl Into<String>) -> Self {
        Self {
            behavior: behavior.into(),
            params: Vec::new(),
        }
    }

    /// Appends a parameter token.
    pub fn push_param(&mut self, param: impl Into<String>) {
        self.params.push(param.into());
    }

    /// Formats the binding as a compact display code.
    ///
    /// # Examples
    ///
    /// ```
    /// use keymap_readme::models::Binding;
    ///
    /// let mut binding = Binding::new("&mt");
    /// binding.push_param("LSHIFT");
    /// binding.push_param("A");
    /// assert_eq!(binding.display_code(), "MT(LSHIFT,A)");
    /// ```
    pub fn display_code(&self) -> String {
        match Behavior::from_name(&self.behavior) {
            Some(behavior) if self.params.len() >= behavior.required_params() => {
                behavior.render(&self.params)
            }
            _ => self.fallback_display(),
        }
    }

    /// All tokens space-joined with every sigil removed.
    fn fallback_display(&self) -> String {
        std::iter::once(self.behavior.as_str())
            .chain(self.params.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
            .replace(SIGIL, "")
    }
}
