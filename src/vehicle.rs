use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VehicleType {
    SubCompact,
    Compact,
    HatchSuvSedan,
    Pickup,
    /// Nothing was picked in the form. Billed at a zero rate.
    #[default]
    Unselected,
}

impl VehicleType {
    pub const BILLABLE: [VehicleType; 4] = [
        VehicleType::SubCompact,
        VehicleType::Compact,
        VehicleType::HatchSuvSedan,
        VehicleType::Pickup,
    ];

    /// Label shown in the vehicle type picker.
    pub fn label(self) -> &'static str {
        match self {
            VehicleType::SubCompact => "Sub-compacto",
            VehicleType::Compact => "Compacto",
            VehicleType::HatchSuvSedan => "Hatch/SUV/Sedan",
            VehicleType::Pickup => "Pickup",
            VehicleType::Unselected => "",
        }
    }

    /// Looks up a picker label. The match is exact and case-sensitive apart from
    /// surrounding whitespace. Returns `None` for anything else, including the empty label.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::BILLABLE
            .into_iter()
            .find(|vehicle_type| vehicle_type.label() == label)
    }

    /// Permissive form of [`VehicleType::from_label`]: unknown labels are treated as
    /// unselected and billed at a zero rate.
    pub fn from_label_or_unselected(label: &str) -> Self {
        match Self::from_label(label) {
            Some(vehicle_type) => vehicle_type,
            None => {
                if !label.trim().is_empty() {
                    tracing::warn!(label, "unrecognized vehicle type, billing as unselected");
                }
                VehicleType::Unselected
            }
        }
    }
}

impl Display for VehicleType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleType::Unselected => f.write_str("(unselected)"),
            other => f.write_str(other.label()),
        }
    }
}
