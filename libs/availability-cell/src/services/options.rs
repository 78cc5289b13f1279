use chrono_tz::Tz;

use crate::models::{AvailabilitySlot, SlotOption};

/// Reduce a slot to the stable `{value, label}` pair the booking picker
/// renders. Optional record fields that are missing are skipped; the label is
/// whatever parts are present, joined.
pub fn slot_option(slot: &AvailabilitySlot, tz: Tz) -> SlotOption {
    let start = slot.start_time.with_timezone(&tz);
    let end = slot.end_time.with_timezone(&tz);
    let time_range = format!("{} - {}", start.format("%H:%M"), end.format("%H:%M"));

    let label = compose_label(&[
        Some(time_range.as_str()),
        slot.appointment_type.as_deref(),
        slot.practitioner_name.as_deref(),
    ]);

    SlotOption {
        value: slot.id.to_string(),
        label,
    }
}

/// Join the present parts with `", "`. Missing or empty parts drop out rather
/// than failing the whole label.
pub fn compose_label(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .filter_map(|part| *part)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
