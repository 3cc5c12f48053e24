// src/domain/property.rs

/// A managed site (usually a hostel). Guests, rooms and bookings hang off it.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub city: Option<String>,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i64,
    pub property_id: i64,
    pub name: String,
    pub beds: i64,
}

/// Free beds in a room over a requested stay.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomAvailability {
    pub room: Room,
    pub free_beds: i64,
}

/// Validated input for a new property.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProperty {
    pub name: String,
    pub city: Option<String>,
}

impl NewProperty {
    pub fn parse(name: &str, city: Option<&str>) -> Result<Self, String> {
        let name = name.trim();
        if name.is_empty() {
            return Err("Property name is required".into());
        }
        Ok(NewProperty {
            name: name.to_string(),
            city: city.map(str::trim).filter(|c| !c.is_empty()).map(String::from),
        })
    }
}

/// Validated input for a new room.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRoom {
    pub name: String,
    pub beds: i64,
}

impl NewRoom {
    pub fn parse(name: &str, beds: &str) -> Result<Self, String> {
        let name = name.trim();
        if name.is_empty() {
            return Err("Room name is required".into());
        }
        let beds: i64 = beds
            .trim()
            .parse()
            .map_err(|_| "Beds must be a whole number".to_string())?;
        if beds < 1 {
            return Err("A room needs at least one bed".into());
        }
        Ok(NewRoom {
            name: name.to_string(),
            beds,
        })
    }
}
