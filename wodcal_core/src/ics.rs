//! iCalendar serialization of the assembled calendar.
//!
//! The document model is rendered through the `icalendar` crate; the only
//! post-processing is rewriting the crate's default `PRODID` line to this
//! tool's identifier.

use crate::{AllDayEvent, CalendarDocument};
use chrono::Duration;
use icalendar::{Calendar, Component, EventLike, Property, ValueType};
use uuid::Uuid;

const PRODID: &str = "-//wodcal//workout calendar//EN";

/// Serialize the document to iCalendar text.
///
/// The output is a pure function of the document: the generation timestamp
/// recorded in it drives `DTSTAMP`, `CREATED` and `LAST-MODIFIED`, and the
/// event `UID`s are derived from date and summary.
pub fn generate_ics(doc: &CalendarDocument) -> String {
    let mut cal = Calendar::new();
    cal.append_property(Property::new("METHOD", "PUBLISH"));
    cal.append_property(Property::new("X-WR-CALNAME", &doc.metadata.name));
    cal.append_property(Property::new("X-WR-TIMEZONE", &doc.metadata.timezone));
    cal.append_property(Property::new("X-WR-CALDESC", &doc.metadata.description));

    let stamp = doc.generated_at.format("%Y%m%dT%H%M%SZ").to_string();
    for event in &doc.events {
        cal.push(build_event(event, &stamp));
    }

    rebrand_prodid(&cal.done().to_string())
}

fn build_event(event: &AllDayEvent, stamp: &str) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&event_uid(event));
    ics_event.summary(&event.summary);
    ics_event.description(&event.summary);
    ics_event.location(&event.location);

    // All-day convention: DTEND names the following day, exclusive
    add_date_property(&mut ics_event, "DTSTART", event);
    add_end_date_property(&mut ics_event, event);

    // The icalendar crate fills DTSTAMP and UID with wall-clock and random
    // values when absent, so both are always set explicitly
    ics_event.add_property("DTSTAMP", stamp);
    ics_event.add_property("CREATED", stamp);
    ics_event.add_property("LAST-MODIFIED", stamp);
    ics_event.add_property("SEQUENCE", "0");
    ics_event.add_property("STATUS", "CONFIRMED");
    ics_event.add_property("TRANSP", "TRANSPARENT");

    ics_event.done()
}

fn add_date_property(ics_event: &mut icalendar::Event, name: &str, event: &AllDayEvent) {
    let mut prop = Property::new(name, event.date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    ics_event.append_property(prop);
}

fn add_end_date_property(ics_event: &mut icalendar::Event, event: &AllDayEvent) {
    let end = event.date + Duration::days(1);
    let mut prop = Property::new("DTEND", end.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    ics_event.append_property(prop);
}

/// Stable event identifier: UUIDv5 of the date and summary
fn event_uid(event: &AllDayEvent) -> String {
    let name = format!("{}/{}", event.date.format("%Y%m%d"), event.summary);
    let uuid = Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes());
    format!("{}@wodcal", uuid)
}

/// Replace the `PRODID` line the icalendar crate writes with our own
fn rebrand_prodid(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());
    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(PRODID);
        } else {
            result.push_str(line);
        }
        result.push_str("\r\n");
    }
    result
}
