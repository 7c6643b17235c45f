//! Declarative motion variants.
//!
//! Animations are described as data, in named states ("hidden", "visible",
//! "rest", "pressed") plus keyframe tracks, and sampled against the game
//! clock. The view decides how each sampled value maps onto a character grid.

use tui_pairs_types::PRESS_FLASH_MS;

/// Timing of a variant transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub delay_ms: u32,
    /// Extra delay per child, in layout order.
    pub stagger_ms: u32,
}

/// Card grid container: children enter one after another once the container
/// is visible.
pub const CONTAINER: Transition = Transition {
    delay_ms: 300,
    stagger_ms: 100,
};

/// Named state of a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemVariant {
    /// Not entered yet.
    Hidden,
    Visible,
    Rest,
    Pressed,
}

impl ItemVariant {
    pub fn scale(self) -> f32 {
        match self {
            ItemVariant::Pressed => 0.95,
            _ => 1.0,
        }
    }

    /// Vertical offset in rows while entering.
    pub fn offset_rows(self) -> u16 {
        match self {
            ItemVariant::Hidden => 1,
            _ => 0,
        }
    }

    pub fn is_drawn(self) -> bool {
        !matches!(self, ItemVariant::Hidden)
    }
}

/// Variant of the card at `index` at episode time `clock_ms`.
///
/// `pressed_at` is the clock value of the card's last activation.
pub fn item_variant(index: usize, clock_ms: u64, pressed_at: Option<u64>) -> ItemVariant {
    let enter_at =
        CONTAINER.delay_ms as u64 + CONTAINER.stagger_ms as u64 * index as u64;
    if clock_ms < enter_at {
        return ItemVariant::Hidden;
    }
    match pressed_at {
        Some(at) if clock_ms.saturating_sub(at) < PRESS_FLASH_MS as u64 => ItemVariant::Pressed,
        _ if clock_ms < enter_at + CONTAINER.stagger_ms as u64 => ItemVariant::Visible,
        _ => ItemVariant::Rest,
    }
}

/// Side panel variants. Note that the open panel uses `Visible`, which
/// collapses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelVariant {
    Visible,
    Hidden,
}

impl PanelVariant {
    pub fn for_open(open: bool) -> Self {
        if open {
            PanelVariant::Visible
        } else {
            PanelVariant::Hidden
        }
    }

    pub fn scale(self) -> f32 {
        match self {
            PanelVariant::Visible => 0.0,
            PanelVariant::Hidden => 0.5,
        }
    }
}

/// A keyframe track: `values[i]` is reached at normalized time `times[i]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframes<const N: usize> {
    pub values: [f32; N],
    pub times: [f32; N],
}

impl<const N: usize> Keyframes<N> {
    /// Sample at normalized time `t` (clamped to 0..=1), easing each segment.
    pub fn sample(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        for i in 1..N {
            let (t0, t1) = (self.times[i - 1], self.times[i]);
            if t <= t1 {
                let span = t1 - t0;
                let local = if span > 0.0 { (t - t0) / span } else { 1.0 };
                let k = ease_in_out(local);
                return self.values[i - 1] + (self.values[i] - self.values[i - 1]) * k;
            }
        }
        self.values[N - 1]
    }
}

/// Symmetric quadratic ease-in-out.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

pub const WIN_DURATION_MS: u32 = 2000;

const WIN_TIMES: [f32; 5] = [0.0, 0.2, 0.5, 0.8, 1.0];

pub const WIN_SCALE: Keyframes<5> = Keyframes {
    values: [1.0, 2.0, 2.0, 1.0, 1.0],
    times: WIN_TIMES,
};

pub const WIN_ROTATE: Keyframes<5> = Keyframes {
    values: [0.0, 0.0, 270.0, 270.0, 0.0],
    times: WIN_TIMES,
};

/// Corner radius in percent.
pub const WIN_RADIUS: Keyframes<5> = Keyframes {
    values: [20.0, 20.0, 50.0, 50.0, 20.0],
    times: WIN_TIMES,
};

/// Sampled pose of the "won" badge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WinPose {
    pub scale: f32,
    pub rotate_deg: f32,
    pub radius_pct: f32,
}

impl WinPose {
    pub fn at(since_won_ms: u64) -> Self {
        let t = since_won_ms as f32 / WIN_DURATION_MS as f32;
        Self {
            scale: WIN_SCALE.sample(t),
            rotate_deg: WIN_ROTATE.sample(t),
            radius_pct: WIN_RADIUS.sample(t),
        }
    }

    /// Blank columns between letters.
    pub fn letter_spacing(&self) -> u16 {
        (self.scale.round() as u16).saturating_sub(1)
    }

    /// Quarter turns read sideways.
    pub fn is_vertical(&self) -> bool {
        let r = self.rotate_deg.rem_euclid(360.0);
        (45.0..135.0).contains(&r) || (225.0..315.0).contains(&r)
    }

    pub fn is_rounded(&self) -> bool {
        self.radius_pct >= 35.0
    }
}
