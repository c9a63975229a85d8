/// A single projectile produced by a weapon's fire action.
///
/// The three coordinates carry caller-defined meaning (origin, heading,
/// magnitude or anything else a weapon wants to encode). A shot has no
/// identity beyond its field values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Shot {
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}
