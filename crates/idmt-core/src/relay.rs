//! Relay slots, their named input fields, and the fixed A/B/C triple.

use crate::constants::DEFAULT_SETTINGS;

/// One of the three independently configured relays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelaySlot {
    A,
    B,
    C,
}

impl RelaySlot {
    pub const ALL: [RelaySlot; 3] = [RelaySlot::A, RelaySlot::B, RelaySlot::C];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            RelaySlot::A => 0,
            RelaySlot::B => 1,
            RelaySlot::C => 2,
        }
    }

    /// Legend label of the curve drawn for this relay.
    pub fn label(self) -> &'static str {
        match self {
            RelaySlot::A => "Rate A",
            RelaySlot::B => "Rate B",
            RelaySlot::C => "Rate C",
        }
    }

    pub fn pickup_field(self) -> ParamField {
        ParamField {
            slot: self,
            kind: ParamKind::PickupCurrent,
        }
    }

    pub fn multiplier_field(self) -> ParamField {
        ParamField {
            slot: self,
            kind: ParamKind::TimeMultiplier,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamKind {
    PickupCurrent,
    TimeMultiplier,
}

/// A single named scalar input, e.g. `IsA` or `TMSC`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParamField {
    pub slot: RelaySlot,
    pub kind: ParamKind,
}

impl ParamField {
    /// All six fields in input order: `IsA, TMSA, IsB, TMSB, IsC, TMSC`.
    pub const ALL: [ParamField; 6] = [
        ParamField {
            slot: RelaySlot::A,
            kind: ParamKind::PickupCurrent,
        },
        ParamField {
            slot: RelaySlot::A,
            kind: ParamKind::TimeMultiplier,
        },
        ParamField {
            slot: RelaySlot::B,
            kind: ParamKind::PickupCurrent,
        },
        ParamField {
            slot: RelaySlot::B,
            kind: ParamKind::TimeMultiplier,
        },
        ParamField {
            slot: RelaySlot::C,
            kind: ParamKind::PickupCurrent,
        },
        ParamField {
            slot: RelaySlot::C,
            kind: ParamKind::TimeMultiplier,
        },
    ];

    /// Element id of the field in the host page.
    pub fn id(self) -> &'static str {
        match (self.kind, self.slot) {
            (ParamKind::PickupCurrent, RelaySlot::A) => "IsA",
            (ParamKind::TimeMultiplier, RelaySlot::A) => "TMSA",
            (ParamKind::PickupCurrent, RelaySlot::B) => "IsB",
            (ParamKind::TimeMultiplier, RelaySlot::B) => "TMSB",
            (ParamKind::PickupCurrent, RelaySlot::C) => "IsC",
            (ParamKind::TimeMultiplier, RelaySlot::C) => "TMSC",
        }
    }

    pub fn from_id(id: &str) -> Option<ParamField> {
        ParamField::ALL.into_iter().find(|f| f.id() == id)
    }
}

/// Pickup current and time multiplier of one relay.
///
/// Non-positive values are allowed and describe a relay that draws nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RelayConfig {
    pub pickup_current: f64,
    pub time_multiplier: f64,
}

impl RelayConfig {
    pub fn new(pickup_current: f64, time_multiplier: f64) -> Self {
        Self {
            pickup_current,
            time_multiplier,
        }
    }

    /// True when the curve for this relay would be empty.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.pickup_current > 0.0 && self.time_multiplier > 0.0)
    }

    pub fn value(&self, kind: ParamKind) -> f64 {
        match kind {
            ParamKind::PickupCurrent => self.pickup_current,
            ParamKind::TimeMultiplier => self.time_multiplier,
        }
    }
}

/// Fixed A/B/C triple. Used for both settings and their curves.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerRelay<T> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T> PerRelay<T> {
    pub fn new(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }

    pub fn from_fn(mut f: impl FnMut(RelaySlot) -> T) -> Self {
        Self {
            a: f(RelaySlot::A),
            b: f(RelaySlot::B),
            c: f(RelaySlot::C),
        }
    }

    pub fn get(&self, slot: RelaySlot) -> &T {
        match slot {
            RelaySlot::A => &self.a,
            RelaySlot::B => &self.b,
            RelaySlot::C => &self.c,
        }
    }

    pub fn get_mut(&mut self, slot: RelaySlot) -> &mut T {
        match slot {
            RelaySlot::A => &mut self.a,
            RelaySlot::B => &mut self.b,
            RelaySlot::C => &mut self.c,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(RelaySlot, &T) -> U) -> PerRelay<U> {
        PerRelay {
            a: f(RelaySlot::A, &self.a),
            b: f(RelaySlot::B, &self.b),
            c: f(RelaySlot::C, &self.c),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (RelaySlot, &T)> {
        [
            (RelaySlot::A, &self.a),
            (RelaySlot::B, &self.b),
            (RelaySlot::C, &self.c),
        ]
        .into_iter()
    }
}

pub type RelaySettings = PerRelay<RelayConfig>;

impl RelaySettings {
    /// Seed values shown when the page first loads.
    pub fn seeded() -> Self {
        PerRelay::from_fn(|slot| {
            let (is, tms) = DEFAULT_SETTINGS[slot.index()];
            RelayConfig::new(is, tms)
        })
    }
}
