use super::CatalogLandmark;

pub(super) const LANDMARKS: &[CatalogLandmark] = &[
    // Tamil Nadu
    CatalogLandmark {
        key: "nellaiappar_temple",
        name: "Nellaiappar Temple",
        kind: "Hindu Temple",
        location: "Tirunelveli, Tamil Nadu",
        aliases: &["nellaiappar", "நெல்லையப்பர்"],
        keywords: &[
            "nellaiappar", "temple", "gopuram", "tower", "shiva", "musical pillars",
            "tirunelveli", "நெல்லையப்பர்", "திருநெல்வேலி", "mani mandapam",
        ],
        image_hints: &[
            "gopuram", "tower", "temple", "pillars", "carved", "hindu", "dravidian", "tank",
            "mandapam",
        ],
        search_term: "Nellaiappar Temple Tirunelveli",
        default_persona: "temple_priest",
        related_personas: &["king_rama_pandya", "temple_priest"],
        gallery: &[
            (
                "https://upload.wikimedia.org/wikipedia/commons/thumb/8/8a/Nellaiappar_Temple_Tower.jpg/800px-Nellaiappar_Temple_Tower.jpg",
                "The majestic Gopuram of Nellaiappar Temple",
            ),
            (
                "https://upload.wikimedia.org/wikipedia/commons/thumb/4/4c/Musical_Pillars_Nellaiappar.jpg/800px-Musical_Pillars_Nellaiappar.jpg",
                "The famous Musical Pillars",
            ),
        ],
        historical_context: "\
An ancient Hindu temple dedicated to Lord Shiva in the heart of Tirunelveli, one of the most \
significant Shiva temples in South India.
- Main gopuram rises to roughly 150 feet with intricate sculptures
- 48 musical pillars, each carved from a single granite stone, ring with different notes
- The Mani Mandapam houses the musical pillars; the Thamarai Kulam is the sacred lotus tank
- Renovated by Pandya kings (7th-14th century) and expanded by Nayak rulers (16th-17th century)
- Deities: Nellaiappar (Shiva) and Kanthimathi Amman (Parvati)
- Festivals: Arudra Darshan, Thai Poosam, Panguni Uthiram",
    },
    CatalogLandmark {
        key: "meenakshi_temple",
        name: "Meenakshi Amman Temple",
        kind: "Hindu Temple",
        location: "Madurai, Tamil Nadu",
        aliases: &["meenakshi", "மீனாட்சி"],
        keywords: &[
            "meenakshi", "madurai", "amman", "temple", "gopuram", "sundareswarar",
            "மீனாட்சி", "மதுரை", "thousand pillar hall", "golden lotus tank",
        ],
        image_hints: &["colorful gopuram", "thousand pillars", "lotus tank", "corridor", "sculptures"],
        search_term: "Meenakshi Temple Madurai",
        default_persona: "temple_priest",
        related_personas: &["king_rama_pandya", "temple_priest", "chola_king"],
        gallery: &[(
            "https://upload.wikimedia.org/wikipedia/commons/thumb/d/d0/Madurai_Meenakshi_temple.jpg/1200px-Madurai_Meenakshi_temple.jpg",
            "The colorful towers of Meenakshi Temple",
        )],
        historical_context: "\
One of the largest temple complexes in India, dedicated to Goddess Meenakshi and Lord \
Sundareswarar.
- 14 gateway towers covered with thousands of painted sculptures; the southern tower is 170 feet
- The Thousand Pillar Hall holds 985 carved pillars
- The Potramarai Kulam (Golden Lotus Tank) is the sacred bathing tank
- Present structure is mostly 16th-17th century, rebuilt by the Nayaks after 1310
- The celestial wedding is celebrated each year as Chithirai Thiruvizha",
    },
    CatalogLandmark {
        key: "brihadisvara_temple",
        name: "Brihadisvara Temple",
        kind: "Hindu Temple",
        location: "Thanjavur, Tamil Nadu",
        aliases: &["brihadisvara", "brihadeeswarar", "big temple", "peruvudaiyar", "பெருவுடையார்"],
        keywords: &[
            "brihadisvara", "thanjavur", "big temple", "chola", "rajaraja", "பெருவுடையார்",
            "தஞ்சாவூர்", "peruvudaiyar", "unesco",
        ],
        image_hints: &["massive tower", "granite temple", "nandi", "chola", "vimana"],
        search_term: "Brihadisvara Temple Thanjavur",
        default_persona: "chola_king",
        related_personas: &["chola_king", "temple_priest"],
        gallery: &[(
            "https://upload.wikimedia.org/wikipedia/commons/thumb/e/e5/Brihadeeswarar_Temple_01.jpg/1200px-Brihadeeswarar_Temple_01.jpg",
            "The towering Vimana of Brihadisvara Temple",
        )],
        historical_context: "\
A UNESCO World Heritage Site built by Rajaraja Chola I between 1003 and 1010 CE, a masterpiece \
of Dravidian architecture.
- The vimana rises 216 feet, crowned by an 80-ton granite capstone
- The monolithic Nandi is 16 feet long and 13 feet high
- Built of granite with no quarry within 50 miles, using interlocking stones without mortar
- Chola frescoes survive beneath later Nayak paintings
- 108 karanas (dance poses) of Bharatanatyam are carved on its walls",
    },
    CatalogLandmark {
        key: "krishnapuram_palace",
        name: "Krishnapuram Palace",
        kind: "Palace/Museum",
        location: "Krishnapuram, Tamil Nadu",
        aliases: &["krishnapuram"],
        keywords: &[
            "krishnapuram", "palace", "mural", "painting", "nayak", "museum", "gajendra moksha",
            "elephant",
        ],
        image_hints: &["palace", "mural", "painting", "courtyard", "museum", "kerala style"],
        search_term: "Krishnapuram Palace",
        default_persona: "british_collector",
        related_personas: &["british_collector", "king_rama_pandya"],
        gallery: &[],
        historical_context: "\
A 17th-century palace of the Madurai Nayak rulers, now a museum.
- Blends Kerala and Tamil architecture under a sloped Kerala-style roof
- Home to the Gajendra Moksha mural, about 22 by 14 feet, the largest single mural in South India
- Collections include Chola and Nayak bronzes, hero stones and ancient coins",
    },
    CatalogLandmark {
        key: "panchalankurichi",
        name: "Panchalankurichi Fort & Memorial",
        kind: "Historical Site",
        location: "Panchalankurichi, Tamil Nadu",
        aliases: &["panchalankurichi", "kattabomman"],
        keywords: &[
            "panchalankurichi", "fort", "kattabomman", "memorial", "freedom fighter",
            "veerapandiya", "வீரபாண்டிய", "காட்டபொம்மன்", "palayakkarar",
        ],
        image_hints: &["fort", "memorial", "statue", "monument", "kattabomman", "freedom"],
        search_term: "Panchalankurichi Kattabomman",
        default_persona: "freedom_fighter",
        related_personas: &["freedom_fighter", "british_collector"],
        gallery: &[],
        historical_context: "\
The seat of Veerapandiya Kattabomman (1760-1799), one of the earliest chieftains to resist \
British colonial rule.
- Kattabomman refused to pay tribute to the East India Company from 1790
- Famous confrontation with Collector Jackson
- Betrayed, captured and hanged at Kayathar on 16 October 1799
- The original fort was razed by the British; the memorial and museum honor his resistance",
    },
    CatalogLandmark {
        key: "mahabalipuram",
        name: "Mahabalipuram Monuments",
        kind: "UNESCO World Heritage Site",
        location: "Mahabalipuram, Tamil Nadu",
        aliases: &["mahabalipuram", "mamallapuram", "shore temple", "five rathas", "மாமல்லபுரம்"],
        keywords: &[
            "mahabalipuram", "mamallapuram", "pallava", "shore temple", "arjuna's penance",
            "five rathas", "மாமல்லபுரம்", "rock cut",
        ],
        image_hints: &["shore temple", "rock cut", "bas relief", "rathas", "sculptures", "beach"],
        search_term: "Mahabalipuram Shore Temple",
        default_persona: "temple_priest",
        related_personas: &["temple_priest", "chola_king"],
        gallery: &[],
        historical_context: "\
7th-8th century Pallava monuments, among the finest rock-cut architecture in India.
- The Shore Temple was built by Narasimhavarman II around 700 CE
- Arjuna's Penance is the largest open-air rock relief in the world, 96 by 43 feet
- The Five Rathas are monolithic temples, each in a different style, never completed
- A major Pallava port whose script spread to Cambodia and Indonesia",
    },
    // Worldwide
    CatalogLandmark {
        key: "pyramids_giza",
        name: "Pyramids of Giza",
        kind: "Ancient Monument",
        location: "Giza, Egypt",
        aliases: &["giza", "great pyramid", "khufu", "cheops"],
        keywords: &[
            "pyramids", "giza", "egypt", "pharaoh", "khufu", "cheops", "sphinx",
            "ancient wonder", "tomb",
        ],
        image_hints: &["pyramid", "sphinx", "desert", "ancient", "egypt", "pharaoh"],
        search_term: "Giza pyramid complex",
        default_persona: "cleopatra",
        related_personas: &["cleopatra"],
        gallery: &[
            (
                "https://upload.wikimedia.org/wikipedia/commons/thumb/e/e3/Kheops-Pyramid.jpg/1200px-Kheops-Pyramid.jpg",
                "The Great Pyramid of Khufu",
            ),
            (
                "https://upload.wikimedia.org/wikipedia/commons/thumb/f/f6/Great_Sphinx_of_Giza.jpg/800px-Great_Sphinx_of_Giza.jpg",
                "The Great Sphinx",
            ),
        ],
        historical_context: "\
The only surviving wonder of the ancient world, built as tombs for Old Kingdom pharaohs.
- The Great Pyramid of Khufu was built around 2560 BCE, originally 481 feet tall
- About 2.3 million blocks averaging 2.5 tons each, over roughly 20 years
- The pyramids of Khafre and Menkaure complete the group
- The Great Sphinx is 240 feet long; its face is believed to be Khafre's",
    },
    CatalogLandmark {
        key: "colosseum",
        name: "Colosseum",
        kind: "Ancient Amphitheater",
        location: "Rome, Italy",
        aliases: &["colosseum", "coliseum", "flavian amphitheatre", "flavian amphitheater"],
        keywords: &[
            "colosseum", "rome", "gladiator", "amphitheater", "roman", "italy", "ancient rome",
            "flavian",
        ],
        image_hints: &["colosseum", "roman", "amphitheater", "arches", "ancient", "arena"],
        search_term: "Colosseum Rome",
        default_persona: "leonardo_da_vinci",
        related_personas: &["leonardo_da_vinci"],
        gallery: &[(
            "https://upload.wikimedia.org/wikipedia/commons/thumb/d/de/Colosseo_2020.jpg/1200px-Colosseo_2020.jpg",
            "The Colosseum exterior",
        )],
        historical_context: "\
The Flavian Amphitheatre, begun by Vespasian around 70 CE and completed by Titus in 80 CE.
- Held an estimated 50,000 to 80,000 spectators
- Hosted gladiatorial contests, animal hunts and public spectacles
- A hypogeum of tunnels and lifts lay beneath the arena floor
- Damaged by earthquakes and stone robbers, it remains a symbol of Rome",
    },
    CatalogLandmark {
        key: "taj_mahal",
        name: "Taj Mahal",
        kind: "Mausoleum",
        location: "Agra, India",
        aliases: &["taj mahal", "ताज महल"],
        keywords: &[
            "taj mahal", "agra", "shah jahan", "mumtaz", "mughal", "marble", "love", "ताज महल",
            "india",
        ],
        image_hints: &["taj mahal", "white marble", "dome", "minarets", "reflection", "garden"],
        search_term: "Taj Mahal",
        default_persona: "shah_jahan",
        related_personas: &["shah_jahan", "emperor_ashoka"],
        gallery: &[(
            "https://upload.wikimedia.org/wikipedia/commons/thumb/b/bd/Taj_Mahal%2C_Agra%2C_India.jpg/1200px-Taj_Mahal%2C_Agra%2C_India.jpg",
            "The Taj Mahal at sunrise",
        )],
        historical_context: "\
A white marble mausoleum commissioned in 1632 by the Mughal emperor Shah Jahan in memory of his \
wife Mumtaz Mahal.
- Chief architect traditionally named as Ustad Ahmad Lahauri
- About 20,000 artisans worked on it for over two decades
- Inlaid with semi-precious stones in pietra dura
- Set in a charbagh garden on the bank of the Yamuna",
    },
    CatalogLandmark {
        key: "sanchi_stupa",
        name: "Sanchi Stupa",
        kind: "Buddhist Monument",
        location: "Sanchi, Madhya Pradesh, India",
        aliases: &["sanchi"],
        keywords: &[
            "sanchi", "stupa", "buddhist", "ashoka", "buddha", "torana", "madhya pradesh",
            "buddhism", "relics",
        ],
        image_hints: &["stupa", "dome", "gateway", "torana", "buddhist", "carved"],
        search_term: "Sanchi Stupa",
        default_persona: "emperor_ashoka",
        related_personas: &["emperor_ashoka"],
        gallery: &[(
            "https://upload.wikimedia.org/wikipedia/commons/thumb/8/8e/Sanchi_Stupa.jpg/1200px-Sanchi_Stupa.jpg",
            "The Great Stupa at Sanchi",
        )],
        historical_context: "\
The Great Stupa, first commissioned by Emperor Ashoka in the 3rd century BCE.
- A hemispherical dome over relics of the Buddha
- Four carved toranas (gateways) added in the 1st century BCE depict Jataka tales
- The Buddha appears only through symbols, never in human form
- One of many stupas Ashoka raised to spread the Dhamma",
    },
];
