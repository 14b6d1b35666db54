//! The embedded Karnataka heritage dataset.
//!
//! Nineteen sites covering the state's UNESCO, proposed-UNESCO, heritage
//! and prehistoric locations. The dataset is fixed: it is validated and
//! loaded into a [`Catalog`] once at startup.

use crate::domain::{Category, Coordinates, Site, SiteDescription, SiteKey, TimelineEntry};

use super::{Catalog, CatalogError};

/// Construct one site record, validating its key and coordinates.
#[allow(clippy::too_many_arguments)]
fn site(
    key: &str,
    name: &str,
    category: Category,
    era: &str,
    lat: f64,
    lon: f64,
    highlights: &[&str],
    history: &str,
    architecture: &str,
    timeline: &[(&str, &str)],
) -> Result<Site, CatalogError> {
    Ok(Site {
        key: SiteKey::parse(key)?,
        name: name.to_string(),
        category,
        era: era.to_string(),
        coordinates: Coordinates::new(lat, lon)?,
        highlights: highlights.iter().map(|h| h.to_string()).collect(),
        description: SiteDescription {
            history: history.to_string(),
            architecture: architecture.to_string(),
            timeline: timeline
                .iter()
                .map(|(year, event)| TimelineEntry {
                    year: year.to_string(),
                    event: event.to_string(),
                })
                .collect(),
        },
    })
}

/// Build the full Karnataka heritage catalog.
pub fn karnataka_catalog() -> Result<Catalog, CatalogError> {
    let sites = vec![
        site(
            "hampi",
            "Hampi (Group of Monuments)",
            Category::Unesco,
            "Vijayanagara (14th–16th c.)",
            15.335,
            76.462,
            &[
                "Virupaksha & Vittala complexes",
                "Royal enclosures & tanks",
                "Stone chariot and monolithic sculptures",
            ],
            "Hampi was the capital of the Vijayanagara Empire, one of the largest and wealthiest kingdoms in medieval India. The city flourished between the 14th and 16th centuries, with over 1,600 monuments spread across 26 square kilometers. It was a center of trade, culture, and religion, attracting merchants and pilgrims from across the world.",
            "The architecture of Hampi is characterized by its massive stone structures, intricate carvings, and unique blend of Dravidian and Islamic styles. The monuments include temples, palaces, markets, and water systems, all built using locally available granite. The Vitthala Temple's stone chariot and musical pillars are engineering marvels.",
            &[
                ("1336", "Foundation of Vijayanagara Empire"),
                ("1509-1529", "Peak under Krishnadevaraya"),
                ("1565", "Battle of Talikota - Empire's decline"),
                ("1986", "UNESCO World Heritage Site designation"),
            ],
        )?,
        site(
            "pattadakal",
            "Pattadakal Group of Monuments",
            Category::Unesco,
            "Chalukya (7th–8th c.)",
            15.948,
            75.816,
            &[
                "Mix of Dravidian and Nagara architecture",
                "Virupaksha and Mallikarjuna temples",
                "UNESCO World Heritage Site",
            ],
            "Pattadakal was a royal city of the Chalukya dynasty, serving as a coronation site for kings. The temple complex represents a unique fusion of northern (Nagara) and southern (Dravidian) architectural styles, showcasing the cultural synthesis of ancient India.",
            "The monuments feature intricate stone carvings, elaborate pillars, and beautifully sculpted panels depicting scenes from Hindu epics. The Virupaksha Temple is the largest and most elaborate, while the Papanatha Temple shows a blend of both architectural styles.",
            &[
                ("7th century", "Early Chalukya period construction"),
                ("8th century", "Peak architectural development"),
                ("1987", "UNESCO World Heritage Site"),
            ],
        )?,
        site(
            "badami",
            "Badami Cave Temples",
            Category::Heritage,
            "Chalukya (6th–7th c.)",
            15.920,
            75.679,
            &[
                "Four rock-cut cave temples",
                "Ancient Hindu and Jain sculptures",
                "Agastya Lake and fort complex",
            ],
            "Badami was the capital of the early Chalukya dynasty. The cave temples carved out of sandstone cliffs represent some of the earliest examples of Hindu temple architecture in South India. The site includes four main caves dedicated to Hindu deities and Jain Tirthankaras.",
            "The caves are carved into the red sandstone cliffs, featuring pillared halls, intricately carved ceilings, and large sculptural panels. The architecture demonstrates the transition from rock-cut to structural temple building in South India.",
            &[
                ("540 CE", "Foundation of Badami by Pulakeshin I"),
                ("6th-7th century", "Cave temple construction"),
                ("8th century", "Decline after Pallava conquest"),
            ],
        )?,
        site(
            "belur",
            "Belur Chennakeshava Temple",
            Category::Heritage,
            "Hoysala (12th c.)",
            13.165,
            75.865,
            &[
                "Exquisite Hoysala architecture",
                "Intricate stone carvings",
                "Dancing figures and narrative panels",
            ],
            "Belur was the first capital of the Hoysala Empire. The Chennakeshava Temple, built by King Vishnuvardhana, is considered one of the finest examples of Hoysala architecture. It took 103 years to complete and features thousands of intricate carvings.",
            "The temple is built on a star-shaped platform (stellate) and features a unique style with lathe-turned pillars, detailed friezes, and sculptures that appear to be in motion. The craftsmanship is so fine that it's said the sculptures were polished with sandalwood paste.",
            &[
                ("1117 CE", "Temple construction begins"),
                ("1220 CE", "Temple completion"),
                ("12th century", "Hoysala architectural peak"),
            ],
        )?,
        site(
            "halebidu",
            "Halebidu Hoysaleswara Temple",
            Category::ProposedUnesco,
            "Hoysala (12th c.)",
            13.216,
            75.993,
            &[
                "Largest Hoysala temple",
                "Over 20,000 sculptures",
                "Proposed UNESCO site",
            ],
            "Halebidu (meaning 'old capital') was the second capital of the Hoysala Empire. The Hoysaleswara Temple, dedicated to Shiva, is one of the largest temples built by the Hoysalas and represents the pinnacle of their architectural achievement.",
            "The temple features two identical shrines, intricate carvings covering every surface, and a unique soapstone construction that allowed for fine detailing. The temple walls are covered with narrative panels depicting Hindu epics and mythology.",
            &[
                ("1121 CE", "Temple construction begins"),
                ("12th century", "Peak Hoysala period"),
                ("1311 CE", "Sacked by Malik Kafur"),
            ],
        )?,
        site(
            "mysore-palace",
            "Mysore Palace",
            Category::Heritage,
            "Wodeyar Dynasty (20th c.)",
            12.305,
            76.653,
            &[
                "Indo-Saracenic architecture",
                "Illuminated during Dasara",
                "Royal residence of Wodeyars",
            ],
            "The Mysore Palace, also known as Amba Vilas Palace, is the official residence of the Wodeyar dynasty. The current structure was built between 1897 and 1912 after a fire destroyed the previous wooden palace. It's one of India's most visited monuments.",
            "The palace combines Hindu, Muslim, Rajput, and Gothic architectural styles. It features three-story stone structure with marble domes and a 145-foot five-story tower. The interior is adorned with intricate carvings, paintings, and stained glass windows.",
            &[
                ("1399", "Wodeyar dynasty established"),
                ("1897", "Fire destroys old palace"),
                ("1912", "Current palace completed"),
            ],
        )?,
        site(
            "sravanabelagola",
            "Shravanabelagola",
            Category::Heritage,
            "Ganga Dynasty (10th c.)",
            12.858,
            76.488,
            &[
                "57-foot monolithic Gommateshwara statue",
                "Important Jain pilgrimage center",
                "Mahamastakabhisheka festival",
            ],
            "Shravanabelagola is one of the most important Jain pilgrimage centers in South India. The site is famous for its massive monolithic statue of Lord Bahubali (Gommateshwara), which stands at 57 feet tall and is one of the largest free-standing statues in the world.",
            "The statue is carved from a single block of granite and stands on Vindhyagiri Hill. The site includes numerous Jain temples, inscriptions, and monuments spanning over a millennium. The architecture reflects various periods of Jain art and culture.",
            &[
                ("981 CE", "Gommateshwara statue consecrated"),
                ("10th century", "Ganga dynasty period"),
                ("Every 12 years", "Mahamastakabhisheka festival"),
            ],
        )?,
        site(
            "bijapur",
            "Bijapur Gol Gumbaz",
            Category::Heritage,
            "Adil Shahi (17th c.)",
            16.824,
            75.715,
            &[
                "World's second largest dome",
                "Whispering gallery",
                "Adil Shahi architecture",
            ],
            "Gol Gumbaz is the mausoleum of Mohammed Adil Shah, the seventh ruler of the Adil Shahi dynasty. The monument is famous for its massive dome, which is the second largest in the world (after St. Peter's Basilica in Rome) and its unique whispering gallery.",
            "The structure features a square base with a massive hemispherical dome. The whispering gallery has remarkable acoustic properties where even the slightest sound echoes multiple times. The architecture is a fine example of Deccan Islamic style.",
            &[
                ("1626", "Construction begins"),
                ("1656", "Completion of Gol Gumbaz"),
                ("17th century", "Adil Shahi architectural peak"),
            ],
        )?,
        site(
            "belur-halebidu",
            "Belur and Halebidu (Hoysala Temples)",
            Category::ProposedUnesco,
            "Hoysala (12th c.)",
            13.190,
            75.929,
            &[
                "Twin Hoysala temple complexes",
                "Masterpiece of Indian temple architecture",
                "Proposed for UNESCO World Heritage",
            ],
            "Belur and Halebidu represent the pinnacle of Hoysala architecture. These twin temple complexes showcase the extraordinary craftsmanship of Hoysala artisans, with thousands of intricate sculptures and carvings that tell stories from Hindu epics and mythology.",
            "The temples are built on star-shaped platforms with lathe-turned pillars, detailed friezes, and sculptures that appear to be in motion. The soapstone construction allowed for incredibly fine detailing, making these temples among the most ornate in India.",
            &[
                ("1117 CE", "Belur temple construction begins"),
                ("1121 CE", "Halebidu temple construction begins"),
                ("12th century", "Peak Hoysala architectural period"),
                ("2014", "Proposed for UNESCO World Heritage status"),
            ],
        )?,
        site(
            "badami-aihole-pattadakal",
            "Badami, Aihole and Pattadakal",
            Category::ProposedUnesco,
            "Chalukya (6th–8th c.)",
            15.934,
            75.748,
            &[
                "Chalukya architectural evolution",
                "Early Hindu temple architecture",
                "Proposed UNESCO extension",
            ],
            "Badami, Aihole, and Pattadakal form a unique architectural ensemble that shows the evolution of early Hindu temple architecture in South India. While Pattadakal is already a UNESCO site, the complete Chalukya complex including Badami and Aihole is proposed for extension.",
            "These sites demonstrate the transition from rock-cut architecture (Badami caves) to structural temple building (Aihole and Pattadakal), showcasing the development of Dravidian and Nagara architectural styles.",
            &[
                ("540 CE", "Badami established as Chalukya capital"),
                ("6th-7th century", "Aihole experimental temple phase"),
                ("7th-8th century", "Pattadakal mature phase"),
                ("Ongoing", "Proposed UNESCO extension"),
            ],
        )?,
        site(
            "western_ghats",
            "Western Ghats (Karnataka)",
            Category::Unesco,
            "Natural",
            13.520,
            75.000,
            &[
                "Biodiversity hotspot",
                "UNESCO World Heritage Site",
                "Ancient mountain range",
            ],
            "The Western Ghats in Karnataka are part of one of the world's eight 'hottest hotspots' of biological diversity. This ancient mountain range dates back to the breakup of the supercontinent Gondwana some 150 million years ago.",
            "The Western Ghats feature unique ecosystems, endemic species, and serve as a critical watershed for peninsular India. The range includes several protected areas and national parks.",
            &[
                ("150 million years ago", "Formation during Gondwana breakup"),
                ("2012", "UNESCO World Heritage Site designation"),
            ],
        )?,
        site(
            "somanathapura",
            "Somanathapura",
            Category::ProposedUnesco,
            "Hoysala (13th c.)",
            12.277,
            76.880,
            &["Kesava Temple", "Hoysala architecture", "Proposed UNESCO site"],
            "Somanathapura is famous for the Kesava Temple, one of the finest examples of Hoysala architecture. Built in 1268 CE, it represents the mature phase of Hoysala temple building.",
            "The temple features a trikuta (three-shrine) design with intricate carvings covering every surface. The star-shaped platform and lathe-turned pillars are characteristic of Hoysala style.",
            &[
                ("1268 CE", "Temple construction"),
                ("13th century", "Hoysala period"),
            ],
        )?,
        site(
            "aihole",
            "Aihole",
            Category::ProposedUnesco,
            "Chalukya (6th–8th c.)",
            16.021,
            75.885,
            &[
                "Cradle of Indian temple architecture",
                "Over 100 temples",
                "Experimental temple designs",
            ],
            "Aihole is known as the 'Cradle of Indian Temple Architecture' with over 100 temples showcasing experimental designs. It was an important center for the development of Hindu temple architecture.",
            "The temples at Aihole show the evolution from simple rock-cut structures to complex structural temples, experimenting with various architectural styles and techniques.",
            &[
                ("6th century", "Early Chalukya period"),
                ("7th-8th century", "Temple building peak"),
            ],
        )?,
        site(
            "bidar",
            "Bidar Fort",
            Category::ProposedUnesco,
            "Bahmani/Adil Shahi (15th–16th c.)",
            17.914,
            77.517,
            &["Bahmani capital", "Islamic architecture", "Proposed UNESCO site"],
            "Bidar was the capital of the Bahmani Sultanate and later the Barid Shahi dynasty. The fort complex represents a unique blend of Persian and Indian architectural styles.",
            "The fort features impressive gates, palaces, mosques, and gardens. The architecture showcases the synthesis of Islamic and Deccan styles with intricate tile work and calligraphy.",
            &[
                ("1429", "Bidar becomes Bahmani capital"),
                ("15th-16th century", "Fort construction and expansion"),
            ],
        )?,
        site(
            "banavasi",
            "Banavasi",
            Category::Heritage,
            "Kadamba/Ancient (4th–6th c.)",
            14.533,
            75.017,
            &[
                "Ancient Kadamba capital",
                "Madhukeshwara Temple",
                "Prehistoric heritage",
            ],
            "Banavasi is one of the oldest towns in Karnataka, serving as the capital of the Kadamba dynasty. It has been continuously inhabited for over 2000 years.",
            "The Madhukeshwara Temple is the main attraction, showcasing early Dravidian architecture. The site includes ancient inscriptions and archaeological remains.",
            &[
                ("4th century CE", "Kadamba capital"),
                ("Ancient", "Continuous habitation"),
            ],
        )?,
        site(
            "mirjan",
            "Mirjan Fort",
            Category::Heritage,
            "Medieval/Maritime (16th c.)",
            14.483,
            74.417,
            &["Coastal fort", "Maritime trade center", "Medieval architecture"],
            "Mirjan Fort was a strategic coastal fortification that played an important role in maritime trade. It was built by the rulers of Gersoppa and later expanded.",
            "The fort features impressive ramparts, bastions, and water management systems. It showcases medieval military architecture adapted to coastal conditions.",
            &[
                ("16th century", "Fort construction"),
                ("Medieval", "Maritime trade period"),
            ],
        )?,
        site(
            "balligave",
            "Balligave",
            Category::Heritage,
            "Kadamba/Ancient (11th–12th c.)",
            14.383,
            75.033,
            &[
                "Ancient temple complex",
                "Kadamba architecture",
                "Living heritage",
            ],
            "Balligave is an ancient temple town with several important temples dating back to the Kadamba and later periods. It represents a living heritage site.",
            "The temples showcase the evolution of temple architecture in Karnataka, with influences from various dynasties that ruled the region.",
            &[
                ("11th-12th century", "Temple construction period"),
                ("Ancient", "Continuous religious significance"),
            ],
        )?,
        site(
            "brahmagiri",
            "Brahmagiri",
            Category::Heritage,
            "Prehistory/Mauryan (300 BCE–200 CE)",
            12.383,
            76.383,
            &[
                "Prehistoric site",
                "Ashokan edicts",
                "Archaeological importance",
            ],
            "Brahmagiri is an important prehistoric and early historic site with evidence of human habitation dating back thousands of years. It contains Ashokan edicts from the 3rd century BCE.",
            "The site includes megalithic structures, rock edicts, and remains of ancient settlements. It provides crucial evidence of early human civilization in South India.",
            &[
                ("300 BCE", "Ashokan period"),
                ("Prehistoric", "Early human habitation"),
            ],
        )?,
        site(
            "kurudumale",
            "Kurudumale",
            Category::Heritage,
            "Vijayanagara (14th–16th c.)",
            13.417,
            77.250,
            &["Ganesha Temple", "Vijayanagara period", "Unique architecture"],
            "Kurudumale is known for its unique Ganesha Temple built during the Vijayanagara period. The site represents the spread of Vijayanagara architectural influence.",
            "The temple features distinctive architectural elements and carvings characteristic of the Vijayanagara style, adapted to local traditions.",
            &[
                ("14th-16th century", "Vijayanagara period"),
                ("Medieval", "Temple construction"),
            ],
        )?,
    ];

    Catalog::new(sites)
}
