use crate::domain::model::Tier;
use crate::utils::error::{LotError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_capacity(field_name: &str, value: i32) -> Result<()> {
    if value < 0 {
        return Err(LotError::InvalidCapacity {
            field: field_name.to_string(),
            value,
        });
    }
    Ok(())
}

pub fn validate_vehicle_classes(field_name: &str, classes: &[String]) -> Result<Vec<Tier>> {
    let mut tiers = Vec::with_capacity(classes.len());
    for class in classes {
        match class.parse::<Tier>() {
            Ok(tier) => tiers.push(tier),
            Err(_) => {
                return Err(LotError::InvalidConfigValue {
                    field: field_name.to_string(),
                    value: class.clone(),
                    reason: "expected one of: small, medium, large".to_string(),
                });
            }
        }
    }
    Ok(tiers)
}
