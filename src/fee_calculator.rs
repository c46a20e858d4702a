use crate::amount::Amount;
use crate::clock::{minutes_since_midnight, parse_clock_time};
use crate::vehicle::VehicleType;
use bigdecimal::BigDecimal;
use jiff::civil::Time;
use thiserror::Error;

const MINUTES_PER_HOUR: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in the entry and exit times (HH:mm).")]
    MissingOrInvalidTime,
    #[error("The exit time must be after the entry time.")]
    ExitBeforeEntry,
}

/// Hourly base rates per vehicle category. `Unselected` is always billed at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    pub sub_compact: BigDecimal,
    pub compact: BigDecimal,
    pub hatch_suv_sedan: BigDecimal,
    pub pickup: BigDecimal,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            sub_compact: BigDecimal::from(2),
            compact: BigDecimal::from(3),
            hatch_suv_sedan: BigDecimal::from(5),
            pickup: BigDecimal::from(7),
        }
    }
}

impl RateTable {
    pub fn base_rate(&self, vehicle_type: VehicleType) -> BigDecimal {
        match vehicle_type {
            VehicleType::SubCompact => self.sub_compact.clone(),
            VehicleType::Compact => self.compact.clone(),
            VehicleType::HatchSuvSedan => self.hatch_suv_sedan.clone(),
            VehicleType::Pickup => self.pickup.clone(),
            VehicleType::Unselected => BigDecimal::from(0),
        }
    }

    /// Hourly rate after the electric discount, which halves the base rate.
    pub fn effective_rate(&self, vehicle_type: VehicleType, is_electric: bool) -> BigDecimal {
        let base_rate = self.base_rate(vehicle_type);
        if is_electric {
            base_rate * electric_multiplier()
        } else {
            base_rate
        }
    }

    pub fn calculate(
        &self,
        vehicle_type: VehicleType,
        is_electric: bool,
        entry_time: &str,
        exit_time: &str,
    ) -> Result<Amount, ValidationError> {
        let (Some(entry), Some(exit)) =
            (parse_clock_time(entry_time), parse_clock_time(exit_time))
        else {
            return Err(ValidationError::MissingOrInvalidTime);
        };
        let hours = billable_hours(entry, exit)?;
        let fee =
            Amount::from(self.effective_rate(vehicle_type, is_electric) * BigDecimal::from(hours));
        tracing::debug!(
            %vehicle_type,
            is_electric,
            %entry,
            %exit,
            billable_hours = hours,
            %fee,
            "calculated parking fee"
        );
        Ok(fee)
    }
}

fn electric_multiplier() -> BigDecimal {
    BigDecimal::new(5.into(), 1)
}

/// Time between entry and exit, rounded up to whole hours. Entry and exit are on the
/// same day, so an exit earlier than the entry is rejected rather than rolled over.
pub fn billable_hours(entry: Time, exit: Time) -> Result<u32, ValidationError> {
    if exit < entry {
        return Err(ValidationError::ExitBeforeEntry);
    }
    let minutes = (minutes_since_midnight(exit) - minutes_since_midnight(entry)).unsigned_abs();
    Ok(minutes.div_ceil(MINUTES_PER_HOUR))
}

/// Computes the fee with the default rate table.
pub fn calculate(
    vehicle_type: VehicleType,
    is_electric: bool,
    entry_time: &str,
    exit_time: &str,
) -> Result<Amount, ValidationError> {
    RateTable::default().calculate(vehicle_type, is_electric, entry_time, exit_time)
}
