use core::str::FromStr;

use serde::{Deserialize, Serialize};

use hotelres_core::{DomainError, DomainResult, Entity, RoomNumber, impl_entity_identity};

/// Bed configuration of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Single,
    Double,
}

impl core::fmt::Display for RoomType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RoomType::Single => f.write_str("Single"),
            RoomType::Double => f.write_str("Double"),
        }
    }
}

impl FromStr for RoomType {
    type Err = DomainError;

    /// Case-insensitive `single` / `double`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("single") {
            Ok(RoomType::Single)
        } else if s.eq_ignore_ascii_case("double") {
            Ok(RoomType::Double)
        } else {
            Err(DomainError::invalid_argument(format!("unknown room type: {s:?}")))
        }
    }
}

/// A bookable room. Identity is the room number alone.
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    number: RoomNumber,
    price: f64,
    room_type: RoomType,
}

impl Room {
    /// Build a room; the price must be finite and non-negative.
    pub fn new(number: impl Into<RoomNumber>, price: f64, room_type: RoomType) -> DomainResult<Self> {
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::invalid_argument(format!(
                "price must be a non-negative decimal number, got {price}"
            )));
        }

        Ok(Self {
            number: number.into(),
            price,
            room_type,
        })
    }

    /// A room with no charge.
    pub fn free(number: impl Into<RoomNumber>, room_type: RoomType) -> Self {
        Self {
            number: number.into(),
            price: 0.0,
            room_type,
        }
    }

    pub fn number(&self) -> &RoomNumber {
        &self.number
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }
}

impl Entity for Room {
    type Id = RoomNumber;

    fn id(&self) -> &Self::Id {
        &self.number
    }
}

impl_entity_identity!(Room);

impl core::fmt::Display for Room {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Room {} - {} - ", self.number, self.room_type)?;
        if self.is_free() {
            f.write_str("FREE")
        } else {
            write!(f, "${:?}", self.price)
        }
    }
}
