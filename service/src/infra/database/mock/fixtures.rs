//! Built-in mock data.

use std::{fmt, str::FromStr};

use common::{DateTimeOf, Money, Percent, SquareMeters};

use crate::domain::{
    chat::{self, Chat, Message},
    listing::{
        AreaOption, Catalog, LandTypeOption, ProjectOption,
        PropertySubTypeOption, PropertyTypeOption,
    },
    notification::{Notification, Payload},
    unit::{self, Unit},
    user::{Participant, Role},
};

/// Parses a built-in fixture value.
///
/// # Panics
///
/// If the `input` is invalid, which never happens for built-in fixtures.
fn parse<T>(input: &str) -> T
where
    T: FromStr,
    T::Err: fmt::Debug,
{
    input
        .parse()
        .unwrap_or_else(|e| panic!("invalid fixture `{input}`: {e:?}"))
}

/// Parses a built-in fixture [RFC 3339] date and time.
///
/// [RFC 3339]: https://tools.ietf.org/html/rfc3339
fn at<Of: ?Sized>(input: &str) -> DateTimeOf<Of> {
    DateTimeOf::from_rfc3339(input)
        .unwrap_or_else(|e| panic!("invalid fixture `{input}`: {e}"))
}

/// Parses a list of built-in fixture strings.
fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|&s| s.to_owned()).collect()
}

/// Description of a built-in [`Unit`] fixture.
struct UnitFixture {
    id: u64,
    area_id: u32,
    area: &'static str,
    unit_number: &'static str,
    building_number: &'static str,
    floor: &'static str,
    rooms: u8,
    actual_area: u32,
    balcony_area: Option<u32>,
    freehold: bool,
    project_id: u32,
    project: &'static str,
    master_project: Option<&'static str>,
    developer: &'static str,
    price: u32,
    photo: &'static str,
}

impl From<UnitFixture> for Unit {
    fn from(f: UnitFixture) -> Self {
        Self {
            id: f.id.into(),
            area_id: f.area_id.into(),
            area_name: parse(f.area),
            unit_number: Some(parse(f.unit_number)),
            building_number: Some(parse(f.building_number)),
            floor: Some(parse(f.floor)),
            rooms: Some(f.rooms.into()),
            actual_area: SquareMeters::new(f.actual_area),
            balcony_area: f.balcony_area.and_then(SquareMeters::new),
            property_type: None,
            project_id: Some(f.project_id.into()),
            project_name: Some(parse(f.project)),
            master_project_name: f.master_project.map(parse),
            developer_name: Some(parse(f.developer)),
            price: Some(Money::aed(f.price)),
            is_free_hold: f.freehold,
            is_lease_hold: !f.freehold,
            cover_image_url: Some(parse(&format!(
                "https://images.unsplash.com/photo-{}?ixlib=rb-4.0.3\
                 &auto=format&fit=crop&w=1400&q=80",
                f.photo,
            ))),
        }
    }
}

/// Returns the built-in [`Unit`]s.
#[must_use]
pub fn units() -> Vec<Unit> {
    [
        UnitFixture {
            id: 101_001,
            area_id: 1,
            area: "Downtown Dubai",
            unit_number: "1208",
            building_number: "BLD-12",
            floor: "12",
            rooms: 2,
            actual_area: 118,
            balcony_area: Some(12),
            freehold: true,
            project_id: 2001,
            project: "Burj Views",
            master_project: Some("Emaar Downtown"),
            developer: "Emaar",
            price: 1_850_000,
            photo: "1560448204-e02f11c3d0e2",
        },
        UnitFixture {
            id: 101_002,
            area_id: 2,
            area: "Business Bay",
            unit_number: "2203",
            building_number: "BLD-22",
            floor: "22",
            rooms: 0,
            actual_area: 46,
            balcony_area: None,
            freehold: true,
            project_id: 2002,
            project: "The Bay Gate",
            master_project: Some("Business Bay District"),
            developer: "Select Group",
            price: 820_000,
            photo: "1497366754035-f200968a6e72",
        },
        UnitFixture {
            id: 101_003,
            area_id: 3,
            area: "Jumeirah Village Circle",
            unit_number: "0811",
            building_number: "BLD-08",
            floor: "8",
            rooms: 1,
            actual_area: 73,
            balcony_area: Some(9),
            freehold: true,
            project_id: 2003,
            project: "Bloom Towers",
            master_project: None,
            developer: "DIFC Developments",
            price: 920_000,
            photo: "1505691938895-1758d7feb511",
        },
        UnitFixture {
            id: 101_004,
            area_id: 4,
            area: "Dubai Marina",
            unit_number: "5401",
            building_number: "BLD-54",
            floor: "54",
            rooms: 3,
            actual_area: 172,
            balcony_area: Some(18),
            freehold: true,
            project_id: 2004,
            project: "Marina Gate",
            master_project: None,
            developer: "Select Group",
            price: 3_650_000,
            photo: "1522708323590-d24dbb6b0267",
        },
        UnitFixture {
            id: 101_005,
            area_id: 5,
            area: "Al Satwa",
            unit_number: "V-07",
            building_number: "VIL-01",
            floor: "G",
            rooms: 4,
            actual_area: 312,
            balcony_area: None,
            freehold: false,
            project_id: 2005,
            project: "Satwa Villas",
            master_project: None,
            developer: "Meraas",
            price: 3_100_000,
            photo: "1512917774080-9991f1c4c750",
        },
    ]
    .into_iter()
    .map(Unit::from)
    .collect()
}

/// Creates a new built-in [`Message`].
fn message(
    id: &str,
    from: &str,
    to: &str,
    text: &str,
    sent_at: &str,
    is_read: bool,
) -> Message {
    Message {
        id: id.into(),
        sender_id: from.into(),
        recipient_id: to.into(),
        text: parse(text),
        sent_at: at(sent_at),
        is_read,
    }
}

/// Returns the built-in [`Chat`]s.
#[must_use]
pub fn chats() -> Vec<Chat> {
    let new = |id: &str, title, counterpart: &str, last, unread, created| {
        Chat {
            id: chat::Id::from(id),
            title: parse(title),
            participants: vec!["user1".into(), counterpart.into()],
            last_message: Some(last),
            unread_count: unread,
            created_at: at(created),
        }
    };

    vec![
        new(
            "1",
            "John Smith - Property Inquiry",
            "user2",
            message(
                "1",
                "user2",
                "user1",
                "Hi!  interested in the apartment in Downtown Dubai. Is it \
                 still available?",
                "2024-01-15T14:30:00Z",
                false,
            ),
            1,
            "2024-01-15T14:00:00Z",
        ),
        new(
            "2",
            "Sarah Johnson - Villa Inquiry",
            "user3",
            message(
                "2",
                "user1",
                "user3",
                "The villa looks great! Can we schedule a viewing this \
                 weekend?",
                "2024-01-14T16:45:00Z",
                true,
            ),
            0,
            "2024-01-14T16:00:00Z",
        ),
        new(
            "3",
            "Michael Brown - Studio Inquiry",
            "user4",
            message(
                "3",
                "user4",
                "user1",
                "Is the studio furnished? What included in the price?",
                "2024-01-13T10:15:00Z",
                true,
            ),
            0,
            "2024-01-13T10:00:00Z",
        ),
    ]
}

/// Returns the built-in [`Message`]s of all the [`chats()`].
#[must_use]
pub fn messages() -> Vec<Message> {
    vec![
        message(
            "1",
            "user2",
            "user1",
            "Hi! I interested in the apartment in Downtown Dubai. Is it still \
             available?",
            "2024-01-15T14:30:00Z",
            false,
        ),
        message(
            "2",
            "user1",
            "user2",
            "Yes, it still available! Would you like to schedule a viewing?",
            "2024-01-15T14:35:00Z",
            true,
        ),
        message(
            "3",
            "user3",
            "user1",
            "The villa looks great! Can we schedule a viewing this weekend?",
            "2024-01-14T16:45:00Z",
            true,
        ),
        message(
            "4",
            "user1",
            "user3",
            "Sure! How about Saturday at 2 PM?",
            "2024-01-14T16:50:00Z",
            true,
        ),
        message(
            "5",
            "user4",
            "user1",
            "Is the studio furnished? What included in the price?",
            "2024-01-13T10:15:00Z",
            true,
        ),
        message(
            "6",
            "user1",
            "user4",
            "Yes, it fully furnished with modern appliances. The price \
             includes utilities.",
            "2024-01-13T10:20:00Z",
            true,
        ),
    ]
}

/// Returns the built-in [`Participant`]s of all the [`chats()`].
#[must_use]
pub fn participants() -> Vec<Participant> {
    [
        ("user1", "You", Role::Seller),
        ("user2", "John Smith", Role::Buyer),
        ("user3", "Sarah Johnson", Role::Buyer),
        ("user4", "Michael Brown", Role::Buyer),
    ]
    .into_iter()
    .map(|(id, name, role)| Participant {
        id: id.into(),
        name: parse(name),
        avatar: None,
        role,
    })
    .collect()
}

/// Returns the built-in [`Notification`]s.
#[must_use]
pub fn notifications() -> Vec<Notification> {
    let new = |id: &str, title: &str, msg: &str, issued, read, payload| {
        Notification {
            id: id.into(),
            title: title.to_owned(),
            message: msg.to_owned(),
            issued_at: at(issued),
            is_read: read,
            payload,
        }
    };

    vec![
        new(
            "1",
            "System Update",
            "The system will be temporarily unavailable for maintenance on \
             February 5th from 2:00 AM to 4:00 AM UTC.",
            "2024-02-04T10:00:00Z",
            false,
            Payload::Maintenance {
                starts_at: at("2024-02-05T02:00:00Z"),
                ends_at: at("2024-02-05T04:00:00Z"),
                reason: "System upgrade and performance improvements".into(),
            },
        ),
        new(
            "2",
            "Document Processing Complete",
            "Your property documents for listing ID #12345 have been \
             successfully processed and verified.",
            "2024-02-03T15:30:00Z",
            true,
            Payload::DocumentsVerified {
                listing_id: "12345".into(),
                documents: strings(&[
                    "passport_copy.pdf",
                    "title_deed.pdf",
                    "emirates_id.pdf",
                ]),
            },
        ),
        new(
            "3",
            "New Message Received",
            "You have a new message from John Smith regarding your listing in \
             Downtown Dubai.",
            "2024-02-03T14:45:00Z",
            false,
            Payload::NewMessage {
                chat_id: "1".into(),
                sender: "John Smith".into(),
                listing: "Downtown Dubai Apartment".into(),
            },
        ),
        new(
            "4",
            "Server Maintenance Completed",
            "The scheduled server maintenance has been completed \
             successfully. All systems are now operational.",
            "2024-01-30T04:15:00Z",
            true,
            Payload::MaintenanceCompleted {
                maintenance_id: "maint_20240130".into(),
                improvements: strings(&[
                    "Database optimization",
                    "Security patches",
                    "Performance improvements",
                ]),
            },
        ),
        new(
            "5",
            "Payment Confirmation",
            "Your payment for premium listing has been successfully \
             processed. Your listing is now featured.",
            "2024-02-02T09:20:00Z",
            true,
            Payload::Payment {
                transaction_id: "txn_98765".into(),
                amount: Money::aed(500),
                listing_id: "12345".into(),
                feature_duration: "30 days".into(),
            },
        ),
        new(
            "6",
            "New Property Listed",
            "A new property matching your preferences has been listed in \
             Dubai Marina.",
            "2024-02-01T18:30:00Z",
            false,
            Payload::NewProperty {
                property_id: 8.into(),
                location: "Dubai Marina".into(),
                price: Money::aed(2_500_000),
                property_type: "apartment".into(),
            },
        ),
        new(
            "7",
            "Account Verification Required",
            "Please complete your account verification to access all \
             platform features.",
            "2024-01-28T11:15:00Z",
            false,
            Payload::VerificationRequired {
                steps: strings(&[
                    "Upload government ID",
                    "Verify phone number",
                    "Complete profile information",
                ]),
                completion: parse::<Percent>("60"),
            },
        ),
        new(
            "8",
            "System Performance Update",
            "We have improved search performance by 40%. Property searches \
             are now faster and more accurate.",
            "2024-01-25T16:45:00Z",
            true,
            Payload::PerformanceUpdate {
                improvements: strings(&[
                    "Search response time reduced from 2s to 1.2s",
                    "Image loading optimized by 30%",
                    "Mobile app performance enhanced",
                ]),
            },
        ),
    ]
}

/// Returns the built-in listing option [`Catalog`].
#[must_use]
pub fn catalog() -> Catalog {
    Catalog {
        areas: [
            "Downtown Dubai",
            "Business Bay",
            "Jumeirah Village Circle",
            "Dubai Marina",
            "Al Satwa",
            "Palm Jumeirah",
            "Arabian Ranches",
            "Jumeirah Lakes Towers",
        ]
        .into_iter()
        .zip(1..)
        .map(|(name, id)| AreaOption {
            id: unit::AreaId::from(id),
            name: parse(name),
        })
        .collect(),
        property_types: ["Apartment", "Villa", "Townhouse", "Penthouse", "Studio"]
            .into_iter()
            .zip(1..)
            .map(|(name, id)| PropertyTypeOption {
                id,
                name: parse(name),
            })
            .collect(),
        property_sub_types: [
            "1 Bedroom",
            "2 Bedrooms",
            "3 Bedrooms",
            "4 Bedrooms",
            "5+ Bedrooms",
            "Duplex",
            "Triplex",
        ]
        .into_iter()
        .zip(1..)
        .map(|(name, id)| PropertySubTypeOption {
            id,
            name: name.into(),
        })
        .collect(),
        land_types: ["Residential", "Commercial", "Mixed Use", "Industrial"]
            .into_iter()
            .zip(1..)
            .map(|(name, id)| LandTypeOption {
                id,
                name: name.into(),
            })
            .collect(),
        projects: [
            ("Burj Views", "Emaar Downtown"),
            ("The Bay Gate", "Business Bay District"),
            ("Bloom Towers", "Jumeirah Village Circle"),
            ("Marina Gate", "Dubai Marina"),
            ("Satwa Villas", "Al Satwa"),
        ]
        .into_iter()
        .zip(1..)
        .map(|((name, master), id)| ProjectOption {
            id: unit::ProjectId::from(id),
            name: parse(name),
            master_project_id: Some(id),
            master_project: Some(parse(master)),
        })
        .collect(),
    }
}

#[cfg(test)]
mod spec {
    use super::{catalog, chats, messages, notifications, participants, units};

    #[test]
    fn fixtures_are_consistent() {
        assert_eq!(units().len(), 5);
        assert_eq!(chats().len(), 3);
        assert_eq!(messages().len(), 6);
        assert_eq!(notifications().len(), 8);

        let participants = participants();
        for chat in chats() {
            let counterpart = chat.counterpart().unwrap();
            assert!(participants.iter().any(|p| &p.id == counterpart));
            assert_eq!(messages().iter().filter(|m| chat.contains(m)).count(), 2);
        }
    }

    #[test]
    fn catalog_sizes() {
        let catalog = catalog();

        assert_eq!(catalog.areas.len(), 8);
        assert_eq!(catalog.property_types.len(), 5);
        assert_eq!(catalog.property_sub_types.len(), 7);
        assert_eq!(catalog.land_types.len(), 4);
        assert_eq!(catalog.projects.len(), 5);
    }

    #[test]
    fn only_last_unit_is_leasehold() {
        let leasehold = units()
            .into_iter()
            .filter(|u| u.is_lease_hold)
            .map(|u| u.area_name.to_string())
            .collect::<Vec<_>>();

        assert_eq!(leasehold, ["Al Satwa"]);
    }
}
