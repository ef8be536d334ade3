//! Spirit state and the raw-data validation boundary.
//!
//! Spirits are created outside this crate by the image-processing pipeline,
//! which fills fields in incrementally. [`SpiritData`] mirrors that partially
//! populated shape; [`SpiritData::validate`] is the single point where raw
//! data is promoted to a complete [`Spirit`]. Nothing downstream of that
//! boundary handles optional fields.

use super::common::{HitPoints, SpiritId};

/// The fixed attribute block assigned when a spirit is generated.
///
/// Immutable for the lifetime of the spirit; battle damage only ever touches
/// [`Spirit::hit_points`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpiritStats {
    pub agility: u32,
    pub arcana: u32,
    pub aura: u32,
    pub charisma: u32,
    pub endurance: u32,
    pub height: u32,
    pub weight: u32,
    pub intimidation: u32,
    pub luck: u32,
    pub strength: u32,
    pub toughness: u32,
}

/// One battling unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spirit {
    pub id: SpiritId,
    pub name: String,
    pub description: String,
    /// Primary elemental type tag. Always present.
    pub primary_type: String,
    /// Secondary elemental type tag, if the generator assigned one.
    pub secondary_type: Option<String>,
    pub original_image_url: String,
    pub generated_image_url: String,
    pub stats: SpiritStats,
    pub hit_points: HitPoints,
}

/// Raised when raw spirit data fails promotion to a complete [`Spirit`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("spirit data is missing required field '{0}'")]
    MissingField(&'static str),
}

/// Raw spirit shape as produced by the external pipeline.
///
/// Every field is optional until [`validate`](Self::validate) promotes the
/// record. `secondary_type` stays optional on the validated spirit;
/// `current_hit_points` defaults to the maximum and is clamped to it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpiritData {
    pub id: Option<SpiritId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub primary_type: Option<String>,
    pub secondary_type: Option<String>,
    pub original_image_url: Option<String>,
    pub generated_image_url: Option<String>,
    pub stats: Option<SpiritStats>,
    pub max_hit_points: Option<u32>,
    pub current_hit_points: Option<u32>,
}

impl SpiritData {
    /// Promotes raw data to a complete spirit, naming the first missing
    /// required field on failure.
    pub fn validate(self) -> Result<Spirit, ValidationError> {
        fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError> {
            value.ok_or(ValidationError::MissingField(field))
        }

        let maximum = required(self.max_hit_points, "max_hit_points")?;
        let hit_points = match self.current_hit_points {
            Some(current) => HitPoints::with_current(current, maximum),
            None => HitPoints::new(maximum),
        };

        Ok(Spirit {
            id: required(self.id, "id")?,
            name: required(self.name, "name")?,
            description: required(self.description, "description")?,
            primary_type: required(self.primary_type, "primary_type")?,
            secondary_type: self.secondary_type,
            original_image_url: required(self.original_image_url, "original_image_url")?,
            generated_image_url: required(self.generated_image_url, "generated_image_url")?,
            stats: required(self.stats, "stats")?,
            hit_points,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_data() -> SpiritData {
        SpiritData {
            id: Some(SpiritId::from("spirit-1")),
            name: Some("Mossling".into()),
            description: Some("A damp forest spirit.".into()),
            primary_type: Some("Grass".into()),
            secondary_type: None,
            original_image_url: Some("https://img.example/original.png".into()),
            generated_image_url: Some("https://img.example/generated.png".into()),
            stats: Some(SpiritStats::default()),
            max_hit_points: Some(40),
            current_hit_points: None,
        }
    }

    #[test]
    fn validate_promotes_complete_data() {
        let spirit = complete_data().validate().unwrap();
        assert_eq!(spirit.name, "Mossling");
        assert_eq!(spirit.hit_points, HitPoints::new(40));
        assert_eq!(spirit.secondary_type, None);
    }

    #[test]
    fn validate_names_the_missing_field() {
        let mut data = complete_data();
        data.primary_type = None;
        assert_eq!(
            data.validate(),
            Err(ValidationError::MissingField("primary_type"))
        );
    }

    #[test]
    fn current_hit_points_clamp_to_maximum() {
        let mut data = complete_data();
        data.current_hit_points = Some(90);
        let spirit = data.validate().unwrap();
        assert_eq!(spirit.hit_points.current(), 40);
    }
}
