//! Demo fixture data.
//!
//! Mirrors what a seeded staging environment would return. Amounts are in
//! whole currency units.

use super::{
    AgencyProfile, Catalog, Client, PastBooking, SlotKind, Supplier, TicketRestriction, TimeSlot,
    Tour,
};

pub fn demo_catalog() -> Catalog {
    Catalog {
        categories: vec![
            "Adventure".to_string(),
            "Culture".to_string(),
            "Beach".to_string(),
            "City".to_string(),
            "Safari".to_string(),
        ],
        tours: tours(),
        suppliers: suppliers(),
        time_slots: time_slots(),
        clients: clients(),
        history: history(),
        agency: AgencyProfile {
            name: "Horizon Travel Partners".to_string(),
            wallet_balance: 750,
        },
    }
}

fn tours() -> Vec<Tour> {
    vec![
        Tour {
            id: 1,
            name: "Desert Dunes Expedition".to_string(),
            category: "Adventure".to_string(),
            price: 45,
            location: "Merzouga".to_string(),
            restriction: TicketRestriction::Unrestricted,
        },
        Tour {
            id: 2,
            name: "Old Medina Walking Tour".to_string(),
            category: "Culture".to_string(),
            price: 30,
            location: "Fes".to_string(),
            restriction: TicketRestriction::Unrestricted,
        },
        Tour {
            id: 3,
            name: "Sunset Catamaran Cruise".to_string(),
            category: "Beach".to_string(),
            price: 80,
            location: "Santorini".to_string(),
            restriction: TicketRestriction::AdultOnly,
        },
        Tour {
            id: 4,
            name: "Night Food Market Crawl".to_string(),
            category: "City".to_string(),
            price: 55,
            location: "Bangkok".to_string(),
            restriction: TicketRestriction::AdultOnly,
        },
        Tour {
            id: 5,
            name: "Junior Ranger Safari Camp".to_string(),
            category: "Safari".to_string(),
            price: 60,
            location: "Maasai Mara".to_string(),
            restriction: TicketRestriction::ChildOnly,
        },
        Tour {
            id: 6,
            name: "Coral Bay Snorkel Day".to_string(),
            category: "Beach".to_string(),
            price: 40,
            location: "Sharm El Sheikh".to_string(),
            restriction: TicketRestriction::Unrestricted,
        },
    ]
}

fn suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: 1,
            name: "Atlas Excursions".to_string(),
            adult_price: 45,
            child_price: 30,
            adult_premium_price: 60,
            child_premium_price: 40,
            commission_pct: 12,
            cancellation_policy: "Free cancellation up to 48h before departure".to_string(),
        },
        Supplier {
            id: 2,
            name: "BlueWave Tours".to_string(),
            adult_price: 52,
            child_price: 34,
            adult_premium_price: 68,
            child_premium_price: 44,
            commission_pct: 10,
            cancellation_policy: "50% refund up to 24h before departure".to_string(),
        },
        Supplier {
            id: 3,
            name: "Savanna Gate Operators".to_string(),
            adult_price: 66,
            child_price: 48,
            adult_premium_price: 85,
            child_premium_price: 62,
            commission_pct: 15,
            cancellation_policy: "Non-refundable".to_string(),
        },
    ]
}

fn time_slots() -> Vec<TimeSlot> {
    vec![
        TimeSlot {
            id: 1,
            label: "08:00 Morning".to_string(),
            kind: SlotKind::Normal,
        },
        TimeSlot {
            id: 2,
            label: "12:30 Midday".to_string(),
            kind: SlotKind::Normal,
        },
        TimeSlot {
            id: 3,
            label: "17:00 Golden Hour".to_string(),
            kind: SlotKind::Premium,
        },
    ]
}

fn clients() -> Vec<Client> {
    vec![
        Client {
            id: 1,
            name: "Amira Haddad".to_string(),
            company: "Nomad Corporate Travel".to_string(),
            email: "amira@nomadct.example".to_string(),
            phone: "+212 600 11 22 33".to_string(),
            wallet_balance: 420,
        },
        Client {
            id: 2,
            name: "Jonas Keller".to_string(),
            company: "Keller & Sons GmbH".to_string(),
            email: "j.keller@kellersons.example".to_string(),
            phone: "+49 171 555 0192".to_string(),
            wallet_balance: 150,
        },
        Client {
            id: 3,
            name: "Priya Raman".to_string(),
            company: "Lotus Events".to_string(),
            email: "priya@lotusevents.example".to_string(),
            phone: "+91 98 4455 7788".to_string(),
            wallet_balance: 980,
        },
        Client {
            id: 4,
            name: "Tom Uchida".to_string(),
            company: "Uchida Logistics".to_string(),
            email: "tom@uchida-log.example".to_string(),
            phone: "+81 90 1234 5678".to_string(),
            wallet_balance: 0,
        },
    ]
}

fn history() -> Vec<PastBooking> {
    vec![
        PastBooking {
            reference: "TD-2401".to_string(),
            destination: "Merzouga".to_string(),
            client: "Nomad Corporate Travel".to_string(),
            month: 3,
            amount: 1240,
        },
        PastBooking {
            reference: "TD-2402".to_string(),
            destination: "Santorini".to_string(),
            client: "Keller & Sons GmbH".to_string(),
            month: 4,
            amount: 2180,
        },
        PastBooking {
            reference: "TD-2403".to_string(),
            destination: "Bangkok".to_string(),
            client: "Lotus Events".to_string(),
            month: 4,
            amount: 960,
        },
        PastBooking {
            reference: "TD-2404".to_string(),
            destination: "Maasai Mara".to_string(),
            client: "Lotus Events".to_string(),
            month: 5,
            amount: 3320,
        },
        PastBooking {
            reference: "TD-2405".to_string(),
            destination: "Santorini".to_string(),
            client: "Uchida Logistics".to_string(),
            month: 6,
            amount: 1675,
        },
        PastBooking {
            reference: "TD-2406".to_string(),
            destination: "Fes".to_string(),
            client: "Nomad Corporate Travel".to_string(),
            month: 6,
            amount: 580,
        },
    ]
}
