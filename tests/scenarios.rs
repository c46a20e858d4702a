use bigdecimal::BigDecimal;
use parking_fee::{Amount, ParkingSession, RateTable, ValidationError, VehicleType, calculate};
use std::str::FromStr;

fn from_form(
    label: &str,
    is_electric: bool,
    entry: &str,
    exit: &str,
) -> Result<String, ValidationError> {
    calculate(VehicleType::from_label_or_unselected(label), is_electric, entry, exit)
        .map(|fee| fee.to_string())
}

#[test]
fn hatch_suv_sedan_morning() {
    assert_eq!(from_form("Hatch/SUV/Sedan", false, "08:00", "10:30"), Ok("15.00".to_string()));
}

#[test]
fn electric_pickup() {
    assert_eq!(from_form("Pickup", true, "09:00", "09:45"), Ok("3.50".to_string()));
}

#[test]
fn compact_leaves_immediately() {
    assert_eq!(from_form("Compacto", false, "14:00", "14:00"), Ok("0.00".to_string()));
    let fee = calculate(VehicleType::Compact, false, "14:00", "14:00").unwrap();
    assert_eq!(fee, Amount::zero());
}

#[test]
fn sub_compact_overnight() {
    assert_eq!(
        from_form("Sub-compacto", false, "23:00", "08:00"),
        Err(ValidationError::ExitBeforeEntry)
    );
}

#[test]
fn missing_entry_time() {
    for label in ["", "Sub-compacto", "Compacto", "Hatch/SUV/Sedan", "Pickup"] {
        assert_eq!(
            from_form(label, false, "", "10:00"),
            Err(ValidationError::MissingOrInvalidTime)
        );
    }
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(
        ValidationError::ExitBeforeEntry.to_string(),
        "The exit time must be after the entry time."
    );
    assert_eq!(
        ValidationError::MissingOrInvalidTime.to_string(),
        "Please fill in the entry and exit times (HH:mm)."
    );
}

#[test]
fn session_with_overridden_rates() {
    let rates = RateTable {
        compact: BigDecimal::from_str("3.40").unwrap(),
        ..RateTable::default()
    };
    let session = ParkingSession {
        plate: Some("BRA2E19".to_string()),
        vehicle_type: VehicleType::Compact,
        is_electric: false,
        entry_time: "07:50".to_string(),
        exit_time: "9:10".to_string(),
    };
    assert_eq!(session.fee(&rates).map(|fee| fee.to_string()), Ok("6.80".to_string()));
}

#[test]
fn form_labels_are_case_sensitive() {
    for label in ["suv", "PICKUP", "compacto"] {
        assert_eq!(from_form(label, false, "08:00", "09:00"), Ok("0.00".to_string()));
    }
    assert_eq!(from_form(" Pickup ", false, "08:00", "09:00"), Ok("7.00".to_string()));
}
