//! Static vehicle catalog: manufacturer → model lists, plus the set of
//! accepted city names.
//!
//! Load-once, immutable data. Model order within a make is display order
//! and is preserved as-is. `"Other"` is a sentinel city that is always
//! accepted.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

static MAKES: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let mut makes: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
    makes.insert("Lexus", &["RX 450", "RX 350", "RX 400", "GX 470", "GX 460", "NX 300", "CT 200h", "GS 350", "NX 200", "RX 300", "ES 350", "IS 200", "ES 300", "IS 250", "LS 460", "IS 350", "HS 250h", "LX 570", "RC F"]);
    makes.insert("Chevrolet", &["Equinox", "Cruze LT", "Captiva", "Cruze", "Orlando", "Volt", "Malibu", "Lacetti", "Aveo", "Matiz", "Spark", "Impala", "Camaro", "Traverse", "1500", "Cruze RS", "Sonic", "Malibu LT", "Silverado", "Trax"]);
    makes.insert("Honda", &["FIT", "Civic", "Cr-v", "Insight", "Stream", "Shuttle", "Element", "Odyssey", "Insight EX", "Hr-v", "Accord", "Inspire", "Fred", "Pilot", "Elysion", "CR-Z", "Step Wagon"]);
    makes.insert("Ford", &["Escape", "Transit", "Fusion", "Mustang", "Focus SE", "Explorer", "C-MAX", "Taurus", "Fiesta", "Focus", "Fusion TITANIUM", "Transit Connect", "Tourneo Connect", "Edge", "Mondeo", "Escort", "Expedition", "Focus TITANIUM", "F150", "KA", "C-MAX SEL", "Fusion SE", "Escape SE", "Focus Titanium", "Focus se"]);
    makes.insert("Hyundai", &["Santa FE", "Sonata", "Elantra", "H1", "Tucson", "Genesis", "I30", "Veloster", "Sonata SPORT", "Elantra SE", "Accent", "Grandeur", "IX35", "Elantra limited", "Sonata hybrid", "Elantra LIMITED", "Elantra GT", "Getz", "Elantra Limited", "Azera", "Sonata Hybrid", "Sonata Limited", "Tucson SE"]);
    makes.insert("Toyota", &["Prius", "Camry", "CHR", "Highlander", "Tacoma", "Prius C", "Aqua", "VOXY", "Vitz", "Yaris", "RAV 4", "Sienna", "Camry Se", "Sienta", "Avalon LIMITED", "Ist", "Corolla", "Tundra", "Avalon", "Camry SE", "Aqua S", "Land Cruiser Prado", "Ipsum", "Prius V", "Passo", "ISIS", "Camry se", "Corolla LE", "Alphard", "Camry XLE", "Venza", "Corolla S", "Altezza", "Estima", "Camry SPORT", "Hilux", "Camry sport", "Land Cruiser", "Aqua s", "Camry HYBRID", "Camry LE", "Wish", "Vitz RS", "Century", "Fun Cargo", "4Runner", "Camry Hybrid", "Highlander LIMITED", "Celica"]);
    makes.insert("MercedesBenz", &["E 350", "E 220", "Vito", "E 300", "C 180", "GLA 250", "A 160", "ML 350", "E 320", "Sprinter", "C 220", "A 170", "C 250", "Vaneo", "CLS 550", "C 300", "C 350", "CLS 500", "S 350", "C 200", "CLK 320", "ML 250", "E 200", "GLE 350", "E 250", "GLC 300", "C 240", "E 240", "E 270", "A 190", "SLK 230", "E 230", "GL 320", "S 550", "E 500", "CLS 350", "CLA 250", "GL 550", "Smart", "A 140", "E 280", "GL 450", "B 170", "CLS 55 AMG", "Viano", "CLK 200", "E 550", "230", "C 280", "E 430", "R 350", "ML 350 4 MATIC", "C 230", "S 500", "320", "GLE 63 AMG", "S 63 AMG", "ML 500", "G 55 AMG", "ML 270", "200", "ML 320", "E 350 AMG", "S 320", "C 320", "GL 350", "300", "CLK 230", "270", "GLC 300 GLC coupe", "G 550", "GLK 350", "190", "E 400", "S 430", "220", "Sprinter 313", "Sprinter 516"]);
    makes.insert("Porsche", &["Cayenne", "911", "Panamera"]);
    makes.insert("Bmw", &["X5", "535", "328", "325", "530", "330", "318", "750", "X6", "520", "525", "M6", "320", "M3", "335", "X5 M", "435", "428", "X5 3.5", "528", "740", "650", "550", "535 i", "316", "X3", "X1", "545", "225", "M5", "328 i", "745", "X4", "323", "X5 E70"]);
    makes.insert("Jeep", &["Grand Cherokee", "Wrangler", "Compass", "Cherokee", "Liberty", "Renegade", "Patriot"]);
    makes.insert("Volkswagen", &["Jetta", "Passat", "Golf", "Sharan", "GTI", "Golf 4", "Vento", "Polo", "Crafter", "Tiguan", "UP", "Touareg", "Golf TDI", "Caddy", "CC", "Passat SE", "Touran", "Scirocco", "Jetta TDI", "Golf 3", "Jetta se", "Jetta SE"]);
    makes.insert("Audi", &["Q7", "Q5", "A6", "A7", "A4", "Q3", "A5", "A8", "Allroad", "A3"]);
    makes.insert("Nissan", &["Juke", "Patrol", "Serena", "Maxima", "Pathfinder", "Altima", "Rogue", "Tiida", "Elgrand", "X-Trail", "Teana", "March", "X-Terra", "Frontier", "Versa", "Note", "Sentra", "Fuga", "Micra", "Murano", "Skyline", "Vanette", "Quest", "Presage", "Navara"]);
    makes.insert("Subaru", &["Forester", "Legacy", "Outback", "XV", "Impreza", "Crosstrek"]);
    makes.insert("Kia", &["Picanto", "Optima", "RIO", "SOUL", "Sorento", "Sportage", "Carnival", "Ceed", "Cadenza", "Cerato", "Avella", "Forte", "Niro", "Optima HYBRID"]);
    makes.insert("Mitsubishi", &["Airtrek", "Lancer", "Pajero", "Delica", "Outlander", "Colt", "Pajero IO", "L 200", "Montero", "Minica", "Mirage", "Grandis", "Outlander SPORT", "Outlander Sport", "Outlander sport", "Carisma"]);
    makes.insert("Mazda", &["616", "1000", "CX-7", "MPV", "323", "Mazda 3", "CX-9", "1300", "Atenza", "Demio", "CX-5", "Mazda 6", "Demio evropuli", "Eunos 500", "Verisa"]);
    makes.insert("Gmc", &["TERRAIN", "Acadia"]);
    makes.insert("Fiat", &["500", "500 Abarth", "500 Sport", "Panda", "500L"]);
    makes.insert("Lincoln", &["Navigator", "Town Car", "MKZ"]);
    makes.insert("LandRover", &["Discovery", "Freelander", "Range Rover", "Land Rover Sport", "Range Rover Evoque"]);
    makes.insert("Mini", &["Cooper", "Countryman", "Countryman S", "Cooper S Cabrio"]);
    makes.insert("Dodge", &["Challenger", "Journey", "RAM", "Avenger", "Durango", "Caliber", "Ramcharger", "Caravan", "Dart", "Neon"]);
    makes.insert("Chrysler", &["200", "PT Cruiser", "Town and Country", "300"]);
    makes.insert("Jaguar", &["XF", "F-pace", "E-pace"]);
    makes.insert("Buick", &["Century", "Encore"]);
    makes.insert("Acura", &["RDX", "TSX", "MDX"]);
    makes.insert("Infiniti", &["FX35", "EX37", "G37"]);
    makes.insert("Cadillac", &["CTS", "SRX", "ATS"]);
    makes.insert("Volvo", &["XC90", "S60"]);
    makes.insert("Hummer", &["H3", "H2"]);
    makes
});

static CITIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "Albuquerque", "Atlanta", "Austin", "Baltimore", "Boise", "Boston",
        "Buffalo", "Charlotte", "Chicago", "Cincinnati", "Cleveland",
        "Colorado Springs", "Columbus", "Dallas", "Denver", "Detroit",
        "Greenville", "Honolulu", "Houston", "Indianapolis",
        "Jacksonville", "Kansas City", "Las Vegas", "Los Angeles",
        "Louisville", "Madison", "Miami", "Milwaukee", "Minneapolis",
        "Nashville", "New Orleans", "New York", "Ocala", "Orlando",
        "Philadelphia", "Phoenix", "Pittsburgh", "Portland", "Raleigh",
        "Richmond", "Sacramento", "Saint Louis", "Salt Lake City",
        "San Antonio", "San Diego", "San Francisco", "San Jose", "Seattle",
        "Spokane", "Tampa", "Tucson", "Washington", "Wichita", "Other",
    ])
});

/// Model list for an exact manufacturer key, in display order.
///
/// Unknown keys return an empty slice.
pub fn models_for(make: &str) -> &'static [&'static str] {
    MAKES.get(make).copied().unwrap_or(&[])
}

/// Whether a make has a model list in the catalog.
pub fn is_known_make(make: &str) -> bool {
    MAKES.contains_key(make)
}

/// Membership test for an already-normalized (title-cased) city name.
///
/// The `"Other"` sentinel is a regular member of the set, so it is
/// always accepted.
pub fn is_known_city(normalized: &str) -> bool {
    CITIES.contains(normalized)
}
