//! Fixed catalog of Shanghai points of interest and reference distances.
//!
//! # Areas
//!
//! | District           | `AreaCategory` | Points |
//! |--------------------|----------------|--------|
//! | Yangpu education   | `Core`         | 3      |
//! | Puxi core          | `Core`         | 8      |
//! | Pudong core        | `Core`         | 4      |
//! | Pudong suburb      | `SuburbMain`   | 1      |
//! | Other suburb       | `Edge`         | 1      |
//!
//! Hubs are the busiest interchange points.  They are left out of the
//! edge-road phase so that phase spreads roads over the quieter points.
//! Repair anchors are the hubs that isolated points get wired to.

use rn_core::AreaCategory;

/// A point of interest.
#[derive(Debug, PartialEq, Eq)]
pub struct Poi {
    pub name:     &'static str,
    pub district: &'static str,
    pub area:     AreaCategory,
    pub hub:      bool,
    pub anchor:   bool,
}

const fn poi(name: &'static str, district: &'static str, area: AreaCategory) -> Poi {
    Poi { name, district, area, hub: false, anchor: false }
}

const fn hub(name: &'static str, district: &'static str, anchor: bool) -> Poi {
    Poi { name, district, area: AreaCategory::Core, hub: true, anchor }
}

const YANGPU: &str = "Yangpu education";
const PUXI:   &str = "Puxi core";
const PUDONG: &str = "Pudong core";

pub static CATALOG: &[Poi] = &[
    poi("Fudan University (Jiangwan)", YANGPU, AreaCategory::Core),
    poi("Fudan University (Handan)", YANGPU, AreaCategory::Core),
    hub("Wujiaochang", YANGPU, true),
    hub("People's Square", PUXI, true),
    hub("The Bund", PUXI, true),
    poi("Yu Garden", PUXI, AreaCategory::Core),
    hub("Jing'an Temple", PUXI, false),
    poi("Shanghai Museum", PUXI, AreaCategory::Core),
    poi("Tianzifang", PUXI, AreaCategory::Core),
    hub("Nanjing Road", PUXI, false),
    poi("Zhongshan Park", PUXI, AreaCategory::Core),
    hub("Oriental Pearl Tower", PUDONG, true),
    poi("Shanghai Science and Technology Museum", PUDONG, AreaCategory::Core),
    poi("Century Park", PUDONG, AreaCategory::Core),
    poi("Shanghai Disneyland", PUDONG, AreaCategory::Core),
    poi("Shanghai Wild Animal Park", "Pudong suburb", AreaCategory::SuburbMain),
    poi("Donglin Temple", "Other suburb", AreaCategory::Edge),
];

/// Known road distances in kilometres.  Lookups are symmetric.
pub static REFERENCE_KM: &[(&str, &str, u32)] = &[
    ("Fudan University (Jiangwan)", "Fudan University (Handan)", 5),
    ("Fudan University (Handan)", "Wujiaochang", 2),
    ("Wujiaochang", "Zhongshan Park", 8),
    ("Fudan University (Handan)", "People's Square", 10),
    ("People's Square", "The Bund", 2),
    ("People's Square", "Jing'an Temple", 3),
    ("People's Square", "Shanghai Museum", 1),
    ("People's Square", "Nanjing Road", 1),
    ("The Bund", "Yu Garden", 3),
    ("Jing'an Temple", "Zhongshan Park", 4),
    ("Tianzifang", "Yu Garden", 2),
    ("Tianzifang", "The Bund", 3),
    ("Nanjing Road", "The Bund", 1),
    ("The Bund", "Oriental Pearl Tower", 2),
    ("People's Square", "Shanghai Science and Technology Museum", 6),
    ("People's Square", "Century Park", 7),
    ("Wujiaochang", "Shanghai Science and Technology Museum", 12),
    ("Oriental Pearl Tower", "Shanghai Science and Technology Museum", 3),
    ("Shanghai Science and Technology Museum", "Century Park", 2),
    ("Century Park", "Shanghai Disneyland", 15),
    ("Shanghai Disneyland", "Shanghai Wild Animal Park", 10),
    ("People's Square", "Donglin Temple", 60),
    ("Shanghai Wild Animal Park", "Donglin Temple", 55),
    ("Shanghai Disneyland", "Donglin Temple", 50),
];

/// Look a point up by name.
pub fn lookup(name: &str) -> Option<&'static Poi> {
    CATALOG.iter().find(|p| p.name == name)
}

/// Reference distance between two points in either order.
pub fn reference_km(a: &str, b: &str) -> Option<u32> {
    REFERENCE_KM
        .iter()
        .find(|&&(x, y, _)| (x == a && y == b) || (x == b && y == a))
        .map(|&(_, _, km)| km)
}

/// Catalog points in catalog order, optionally without the far suburbs.
pub fn points(include_far_suburb: bool) -> Vec<&'static Poi> {
    CATALOG
        .iter()
        .filter(|p| include_far_suburb || !p.area.is_far_suburb())
        .collect()
}
