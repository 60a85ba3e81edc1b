pub struct City {
    pub name: &'static str,
    pub region: &'static str,
    pub lat: f64,
    pub lon: f64,
}

// Major Ethiopian cities, used by the seed-zones command to bootstrap
// coarse circular service zones around each city center.
pub const CITIES: &[City] = &[
    City {
        name: "Addis Ababa",
        region: "Addis Ababa",
        lat: 9.0302,
        lon: 38.7469,
    },
    City {
        name: "Dire Dawa",
        region: "Dire Dawa",
        lat: 9.5931,
        lon: 41.8661,
    },
    City {
        name: "Mekelle",
        region: "Tigray",
        lat: 13.4967,
        lon: 39.4697,
    },
    City {
        name: "Gondar",
        region: "Amhara",
        lat: 12.6030,
        lon: 37.4521,
    },
    City {
        name: "Bahir Dar",
        region: "Amhara",
        lat: 11.5842,
        lon: 37.3900,
    },
    City {
        name: "Hawassa",
        region: "Sidama",
        lat: 7.0622,
        lon: 38.4777,
    },
    City {
        name: "Dessie",
        region: "Amhara",
        lat: 11.1330,
        lon: 39.6352,
    },
    City {
        name: "Jimma",
        region: "Oromia",
        lat: 7.6782,
        lon: 36.8344,
    },
    City {
        name: "Jijiga",
        region: "Somali",
        lat: 9.3500,
        lon: 42.8000,
    },
    City {
        name: "Shashamane",
        region: "Oromia",
        lat: 7.2003,
        lon: 38.5902,
    },
    City {
        name: "Bishoftu (Debre Zeit)",
        region: "Oromia",
        lat: 8.7525,
        lon: 38.9785,
    },
    City {
        name: "Adama (Nazret)",
        region: "Oromia",
        lat: 8.5411,
        lon: 39.2705,
    },
    City {
        name: "Harar",
        region: "Harari",
        lat: 9.3114,
        lon: 42.1194,
    },
    City {
        name: "Arba Minch",
        region: "Southern Nations",
        lat: 6.0333,
        lon: 37.5500,
    },
    City {
        name: "Gambela",
        region: "Gambela",
        lat: 8.2500,
        lon: 34.5833,
    },
];
