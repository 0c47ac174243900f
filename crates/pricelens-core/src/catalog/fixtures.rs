//! Sample listings keyed by category, standing in for a live scraper.
//!
//! Groups are matched in declaration order; the first group with a keyword
//! contained in the lowercased category wins.

use crate::model::ProductRecord;

/// A hand-authored sample listing.
#[derive(Debug)]
pub struct FixtureProduct {
    pub name: &'static str,
    pub price: f64,
    pub features: &'static [&'static str],
    pub rating: f64,
    pub reviews: &'static [&'static str],
}

impl FixtureProduct {
    /// Build an owned record.
    pub fn to_record(&self) -> ProductRecord {
        ProductRecord {
            name: self.name.to_string(),
            price: self.price,
            features: self.features.iter().map(|s| s.to_string()).collect(),
            rating: self.rating,
            reviews: self.reviews.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A category of sample listings with the keywords that select it.
#[derive(Debug)]
pub struct FixtureGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub keywords: &'static [&'static str],
    pub products: &'static [FixtureProduct],
}

impl FixtureGroup {
    /// True when any keyword occurs in the already-lowercased category.
    pub fn matches(&self, category_lower: &str) -> bool {
        self.keywords.iter().any(|k| category_lower.contains(k))
    }

    /// Records priced inside `[min_price, max_price]`, in table order.
    pub fn within(&self, min_price: f64, max_price: f64) -> Vec<ProductRecord> {
        self.products
            .iter()
            .filter(|p| min_price <= p.price && p.price <= max_price)
            .map(FixtureProduct::to_record)
            .collect()
    }
}

pub static FIXTURE_GROUPS: &[FixtureGroup] = &[
    FixtureGroup {
        id: "laptops",
        label: "Gaming laptops",
        keywords: &["laptop", "gaming"],
        products: LAPTOPS,
    },
    FixtureGroup {
        id: "earbuds",
        label: "Earbuds & headphones",
        keywords: &["earbuds", "headphone", "earphone"],
        products: EARBUDS,
    },
    FixtureGroup {
        id: "smartwatches",
        label: "Smartwatches",
        keywords: &["smartwatch", "watch"],
        products: SMARTWATCHES,
    },
    FixtureGroup {
        id: "smartphones",
        label: "Smartphones",
        keywords: &["smartphone", "phone", "mobile"],
        products: SMARTPHONES,
    },
    FixtureGroup {
        id: "televisions",
        label: "Televisions",
        keywords: &["tv", "television"],
        products: TELEVISIONS,
    },
    FixtureGroup {
        id: "refrigerators",
        label: "Refrigerators",
        keywords: &["refrigerator", "fridge"],
        products: REFRIGERATORS,
    },
    FixtureGroup {
        id: "washing-machines",
        label: "Washing machines",
        keywords: &["washing", "washer"],
        products: WASHING_MACHINES,
    },
    FixtureGroup {
        id: "cameras",
        label: "Cameras",
        keywords: &["camera", "dslr"],
        products: CAMERAS,
    },
    FixtureGroup {
        id: "tablets",
        label: "Tablets",
        keywords: &["tablet", "ipad"],
        products: TABLETS,
    },
    FixtureGroup {
        id: "printers",
        label: "Printers",
        keywords: &["printer"],
        products: PRINTERS,
    },
    FixtureGroup {
        id: "air-conditioners",
        label: "Air conditioners",
        keywords: &["ac"],
        products: AIR_CONDITIONERS,
    },
];

const LAPTOPS: &[FixtureProduct] = &[
    FixtureProduct {
        name: "ASUS ROG Strix G16 (2024)",
        price: 159990.0,
        features: &[
            "Intel Core i9-14900HX",
            "NVIDIA RTX 4070 8GB",
            "16GB DDR5 RAM",
            "1TB PCIe 4.0 SSD",
            "16\" QHD+ 240Hz",
        ],
        rating: 4.7,
        reviews: &[
            "Exceptional gaming performance",
            "Beautiful display with high refresh rate",
            "Great build quality",
            "Effective cooling system",
            "Premium features throughout",
        ],
    },
    FixtureProduct {
        name: "Lenovo Legion Pro 7i (2024)",
        price: 189990.0,
        features: &[
            "Intel Core i9-14900HX",
            "NVIDIA RTX 4080 12GB",
            "32GB DDR5 RAM",
            "1TB PCIe 4.0 SSD",
            "16\" Mini LED 240Hz",
        ],
        rating: 4.8,
        reviews: &[
            "Top-tier gaming performance",
            "Mini LED display is stunning",
            "Excellent build quality",
            "Great keyboard and trackpad",
            "Advanced cooling solution",
        ],
    },
    FixtureProduct {
        name: "HP Omen 16 (2024)",
        price: 139990.0,
        features: &[
            "AMD Ryzen 9 7940HS",
            "NVIDIA RTX 4060 8GB",
            "16GB DDR5 RAM",
            "1TB PCIe 4.0 SSD",
            "16\" QHD 165Hz",
        ],
        rating: 4.6,
        reviews: &[
            "Great value for performance",
            "Solid build quality",
            "Good battery life for a gaming laptop",
            "Effective cooling",
            "Nice display quality",
        ],
    },
    FixtureProduct {
        name: "MSI Katana 15 (2024)",
        price: 89990.0,
        features: &[
            "Intel Core i7-13620H",
            "NVIDIA RTX 4050 6GB",
            "16GB DDR5 RAM",
            "512GB PCIe 4.0 SSD",
            "15.6\" FHD 144Hz",
        ],
        rating: 4.4,
        reviews: &[
            "Good entry-level gaming performance",
            "Decent build quality",
            "144Hz display is smooth",
            "Good value for money",
            "Runs a bit warm under load",
        ],
    },
    FixtureProduct {
        name: "Acer Nitro V 15 (2024)",
        price: 69990.0,
        features: &[
            "Intel Core i5-13420H",
            "NVIDIA RTX 3050 6GB",
            "16GB DDR5 RAM",
            "512GB PCIe SSD",
            "15.6\" FHD 144Hz",
        ],
        rating: 4.3,
        reviews: &[
            "Great budget gaming laptop",
            "Good performance for the price",
            "Decent display",
            "Adequate cooling",
            "Value for money",
        ],
    },
    FixtureProduct {
        name: "Dell G15 Gaming (2024)",
        price: 74990.0,
        features: &[
            "AMD Ryzen 5 7535HS",
            "NVIDIA RTX 3050 6GB",
            "16GB DDR5 RAM",
            "512GB PCIe SSD",
            "15.6\" FHD 120Hz",
        ],
        rating: 4.4,
        reviews: &[
            "Reliable performance",
            "Good build quality",
            "Decent battery life",
            "Effective cooling system",
            "Good value proposition",
        ],
    },
];

const EARBUDS: &[FixtureProduct] = &[
    FixtureProduct {
        name: "OnePlus Buds Pro 2",
        price: 9990.0,
        features: &[
            "Active Noise Cancellation",
            "Dual Dynamic Drivers",
            "IP55 Water Resistance",
            "Up to 39 hours with case",
            "Fast Charging",
        ],
        rating: 4.6,
        reviews: &[
            "Excellent sound quality",
            "Great ANC performance",
            "Comfortable for long wear",
            "Battery life is impressive",
            "App integration is seamless",
        ],
    },
    FixtureProduct {
        name: "Samsung Galaxy Buds2 Pro",
        price: 14990.0,
        features: &[
            "Intelligent Active Noise Cancellation",
            "Hi-Fi Sound",
            "IPX7 Water Resistance",
            "Up to 29 hours with case",
            "Spatial Audio",
        ],
        rating: 4.7,
        reviews: &[
            "Premium sound quality",
            "Superior ANC compared to competitors",
            "Very comfortable fit",
            "Seamless integration with Samsung devices",
            "Battery life could be better",
        ],
    },
    FixtureProduct {
        name: "boAt Airdopes 141",
        price: 1499.0,
        features: &[
            "Low Latency Mode",
            "IPX4 Water Resistance",
            "Up to 42 hours with case",
            "Touch Controls",
            "Voice Assistant Support",
        ],
        rating: 4.3,
        reviews: &[
            "Great value for money",
            "Good sound quality for the price",
            "Battery life is excellent",
            "Build quality is decent",
            "Call quality could be better",
        ],
    },
    FixtureProduct {
        name: "Apple AirPods Pro",
        price: 19990.0,
        features: &[
            "Active Noise Cancellation",
            "Transparency Mode",
            "Spatial Audio",
            "IPX4 Water Resistance",
            "Up to 24 hours with case",
        ],
        rating: 4.8,
        reviews: &[
            "Best-in-class ANC",
            "Seamless integration with Apple ecosystem",
            "Comfortable for all-day wear",
            "Sound quality is excellent",
            "Price is a bit high",
        ],
    },
];

const SMARTWATCHES: &[FixtureProduct] = &[
    FixtureProduct {
        name: "Apple Watch Series 7",
        price: 32990.0,
        features: &[
            "Always-On Retina Display",
            "Heart Rate Monitoring",
            "ECG App",
            "Blood Oxygen Monitoring",
            "Water Resistant",
        ],
        rating: 4.8,
        reviews: &[
            "Best smartwatch for iPhone users",
            "Excellent health tracking features",
            "Premium build quality",
            "Battery life could be better",
            "Seamless integration with Apple ecosystem",
        ],
    },
    FixtureProduct {
        name: "Samsung Galaxy Watch 5",
        price: 24990.0,
        features: &[
            "BioActive Sensor",
            "Sleep Tracking",
            "Body Composition Analysis",
            "Water Resistant",
            "Up to 50 hours battery life",
        ],
        rating: 4.6,
        reviews: &[
            "Great for Android users",
            "Comprehensive health tracking",
            "Good battery life",
            "Comfortable to wear",
            "App ecosystem is growing",
        ],
    },
    FixtureProduct {
        name: "Noise ColorFit Pro 4",
        price: 2499.0,
        features: &[
            "1.78\" AMOLED Display",
            "SpO2 Monitoring",
            "Heart Rate Monitoring",
            "14 Sports Modes",
            "Water Resistant",
        ],
        rating: 4.2,
        reviews: &[
            "Excellent value for money",
            "Good display quality",
            "Battery life is decent",
            "Build quality is acceptable",
            "App could be improved",
        ],
    },
    FixtureProduct {
        name: "Fire-Boltt Ninja",
        price: 1999.0,
        features: &[
            "1.69\" HD Display",
            "Heart Rate Monitoring",
            "Sleep Tracking",
            "14 Sports Modes",
            "IP67 Water Resistant",
        ],
        rating: 4.1,
        reviews: &[
            "Very affordable",
            "Good basic fitness tracking",
            "Battery life is good",
            "Build quality is basic",
            "App needs improvement",
        ],
    },
];

const SMARTPHONES: &[FixtureProduct] = &[
    FixtureProduct {
        name: "iPhone 15 Pro Max",
        price: 159900.0,
        features: &[
            "A17 Pro chip",
            "6.7-inch Super Retina XDR display",
            "48MP Main + 12MP Ultra Wide + 12MP Telephoto",
            "Titanium design",
            "USB-C",
        ],
        rating: 4.8,
        reviews: &[
            "Best iPhone camera system yet",
            "Titanium build feels premium",
            "Excellent performance",
            "Great battery life",
            "USB-C is a welcome addition",
        ],
    },
    FixtureProduct {
        name: "Samsung Galaxy S24 Ultra",
        price: 129999.0,
        features: &[
            "Snapdragon 8 Gen 3",
            "6.8-inch QHD+ Dynamic AMOLED",
            "200MP Main + 12MP Ultra + Dual Telephoto",
            "Titanium frame",
            "AI features",
        ],
        rating: 4.7,
        reviews: &[
            "Excellent camera system",
            "Galaxy AI features are useful",
            "S Pen functionality is great",
            "Premium build quality",
            "Impressive battery life",
        ],
    },
    FixtureProduct {
        name: "OnePlus 12",
        price: 64999.0,
        features: &[
            "Snapdragon 8 Gen 3",
            "6.82-inch LTPO AMOLED",
            "50MP Main + 48MP Ultra + 64MP Telephoto",
            "100W charging",
            "Hasselblad cameras",
        ],
        rating: 4.6,
        reviews: &[
            "Excellent value flagship",
            "Super fast charging",
            "Great display quality",
            "Improved camera system",
            "Strong performance",
        ],
    },
    FixtureProduct {
        name: "Nothing Phone (2)",
        price: 44999.0,
        features: &[
            "Snapdragon 8+ Gen 1",
            "6.7-inch LTPO OLED",
            "50MP Main + 50MP Ultra",
            "Glyph Interface",
            "Wireless charging",
        ],
        rating: 4.4,
        reviews: &[
            "Unique design with Glyph",
            "Clean software experience",
            "Good camera performance",
            "Solid build quality",
            "Decent battery life",
        ],
    },
    FixtureProduct {
        name: "Pixel 8 Pro",
        price: 106999.0,
        features: &[
            "Google Tensor G3",
            "6.7-inch Super Actua display",
            "50MP Main + 48MP Ultra + 48MP Telephoto",
            "AI features",
            "7 years updates",
        ],
        rating: 4.7,
        reviews: &[
            "Best camera experience",
            "AI features are impressive",
            "Clean Android experience",
            "Great display quality",
            "Long software support",
        ],
    },
    FixtureProduct {
        name: "Redmi Note 13 Pro+ 5G",
        price: 31999.0,
        features: &[
            "Dimensity 7200 Ultra",
            "6.67-inch 1.5K AMOLED",
            "200MP Main camera",
            "120W charging",
            "IP68 rating",
        ],
        rating: 4.3,
        reviews: &[
            "Great value for money",
            "Premium build quality",
            "Fast charging is amazing",
            "Good camera performance",
            "MIUI has some bloatware",
        ],
    },
];

const TELEVISIONS: &[FixtureProduct] = &[
    FixtureProduct {
        name: "Samsung 65-inch Neo QLED QN90C",
        price: 189990.0,
        features: &[
            "4K Neo QLED",
            "Mini LED Technology",
            "Neural Quantum Processor 4K",
            "Gaming Hub",
            "Object Tracking Sound+",
        ],
        rating: 4.8,
        reviews: &[
            "Exceptional picture quality",
            "Great for gaming with low latency",
            "Impressive brightness levels",
            "Good sound system",
            "Premium build quality",
        ],
    },
    FixtureProduct {
        name: "LG C3 65-inch OLED evo",
        price: 209990.0,
        features: &[
            "4K OLED evo",
            "α9 AI Processor Gen6",
            "Dolby Vision IQ",
            "NVIDIA G-SYNC",
            "4 HDMI 2.1 ports",
        ],
        rating: 4.9,
        reviews: &[
            "Perfect blacks and contrast",
            "Excellent for gaming",
            "WebOS is smooth",
            "Great upscaling",
            "Best-in-class picture quality",
        ],
    },
    FixtureProduct {
        name: "Sony Bravia XR X90L 65-inch",
        price: 159990.0,
        features: &[
            "Full Array LED",
            "XR Cognitive Processor",
            "Google TV",
            "Acoustic Multi-Audio",
            "HDMI 2.1",
        ],
        rating: 4.7,
        reviews: &[
            "Natural picture quality",
            "Great motion handling",
            "Good for PS5 gaming",
            "Excellent upscaling",
            "Google TV works well",
        ],
    },
    FixtureProduct {
        name: "OnePlus 65-inch Q2 Pro",
        price: 99990.0,
        features: &[
            "QLED Technology",
            "4K Resolution",
            "Google TV",
            "Dolby Vision & Atmos",
            "HDMI 2.1",
        ],
        rating: 4.5,
        reviews: &[
            "Great value for money",
            "Good picture quality",
            "Smooth performance",
            "Decent sound output",
            "Premium design",
        ],
    },
    FixtureProduct {
        name: "Hisense 65U7K QLED",
        price: 84990.0,
        features: &[
            "QLED Technology",
            "144Hz Refresh Rate",
            "Full Array Local Dimming",
            "Dolby Vision IQ",
            "IMAX Enhanced",
        ],
        rating: 4.4,
        reviews: &[
            "Excellent value proposition",
            "Good gaming features",
            "Bright HDR performance",
            "Decent sound quality",
            "Feature-rich for the price",
        ],
    },
    FixtureProduct {
        name: "TCL 65-inch QLED C645",
        price: 69990.0,
        features: &["4K QLED", "Google TV", "Dolby Vision", "HDMI 2.1", "Game Master 2.0"],
        rating: 4.3,
        reviews: &[
            "Great budget option",
            "Good picture quality",
            "Gaming features work well",
            "Value for money",
            "Google TV is smooth",
        ],
    },
];

const REFRIGERATORS: &[FixtureProduct] = &[
    FixtureProduct {
        name: "LG 687L French Door Refrigerator",
        price: 129990.0,
        features: &[
            "Linear Inverter Compressor",
            "Door-in-Door",
            "Smart Diagnosis",
            "Fresh Air Filter",
            "Smart Connect",
        ],
        rating: 4.8,
        reviews: &[
            "Spacious and well-organized",
            "Excellent cooling performance",
            "Smart features are useful",
            "Premium build quality",
            "Energy efficient",
        ],
    },
    FixtureProduct {
        name: "Samsung 638L French Door Refrigerator",
        price: 119990.0,
        features: &[
            "Digital Inverter Technology",
            "Twin Cooling Plus",
            "Power Cool",
            "LED Lighting",
            "Frost Free",
        ],
        rating: 4.7,
        reviews: &[
            "Great storage space",
            "Efficient cooling",
            "Good organization",
            "Quiet operation",
            "Premium features",
        ],
    },
    FixtureProduct {
        name: "Whirlpool 340L Frost Free Double Door",
        price: 32990.0,
        features: &[
            "6th Sense Technology",
            "IntelliSense Inverter",
            "Microblock Technology",
            "Stabilizer Free Operation",
            "Frost Free",
        ],
        rating: 4.5,
        reviews: &[
            "Good value for money",
            "Reliable performance",
            "Spacious enough",
            "Easy to maintain",
            "Energy efficient",
        ],
    },
    FixtureProduct {
        name: "Haier 253L Frost Free Double Door",
        price: 24990.0,
        features: &[
            "Cooling on Wheels",
            "Anti-Bacterial Gasket",
            "Stabilizer Free Operation",
            "Frost Free",
            "Energy Efficient",
        ],
        rating: 4.4,
        reviews: &[
            "Compact and efficient",
            "Good for small families",
            "Cools well",
            "Easy to maintain",
            "Affordable option",
        ],
    },
    FixtureProduct {
        name: "Godrej 236L Frost Free Double Door",
        price: 22990.0,
        features: &[
            "Cool-Touch Technology",
            "Stabilizer Free Operation",
            "Frost Free",
            "Energy Efficient",
            "Spill-Proof Shelves",
        ],
        rating: 4.3,
        reviews: &[
            "Reliable brand",
            "Good basic features",
            "Value for money",
            "Easy to clean",
            "Suitable for Indian conditions",
        ],
    },
];

const WASHING_MACHINES: &[FixtureProduct] = &[
    FixtureProduct {
        name: "LG 8kg Front Load",
        price: 45990.0,
        features: &[
            "Inverter Direct Drive Motor",
            "Steam Function",
            "6 Motion DD",
            "Smart Diagnosis",
            "Child Lock",
        ],
        rating: 4.6,
        reviews: &[
            "Excellent washing performance",
            "Very quiet operation",
            "Steam function works well",
            "Energy efficient",
            "Premium price but worth it",
        ],
    },
    FixtureProduct {
        name: "Samsung 7kg Front Load",
        price: 39990.0,
        features: &[
            "Digital Inverter Motor",
            "Ecobubble Technology",
            "AddWash Door",
            "Smart Check",
            "Child Lock",
        ],
        rating: 4.5,
        reviews: &[
            "Great washing results",
            "Quiet operation",
            "AddWash is convenient",
            "Good for large loads",
            "App connectivity is useful",
        ],
    },
    FixtureProduct {
        name: "Whirlpool 6.5kg Top Load",
        price: 24990.0,
        features: &[
            "Power Clean Technology",
            "ZPF Technology",
            "Aqua Energie",
            "Magic Filter",
            "Child Lock",
        ],
        rating: 4.3,
        reviews: &[
            "Good value for money",
            "Cleans clothes well",
            "Easy to use",
            "Durable build",
            "Suitable for Indian conditions",
        ],
    },
    FixtureProduct {
        name: "IFB 6.5kg Front Load",
        price: 32990.0,
        features: &["Aqua Energie", "Built-in Heater", "16 Programs", "Child Lock", "Delay End"],
        rating: 4.4,
        reviews: &[
            "Good washing performance",
            "Built-in heater is useful",
            "Multiple programs",
            "Water efficient",
            "After-sales service is good",
        ],
    },
];

const CAMERAS: &[FixtureProduct] = &[
    FixtureProduct {
        name: "Canon EOS 250D",
        price: 49990.0,
        features: &[
            "24.1MP APS-C Sensor",
            "4K Video Recording",
            "Dual Pixel CMOS AF",
            "Vari-angle Touch Screen",
            "Wi-Fi & Bluetooth",
        ],
        rating: 4.6,
        reviews: &[
            "Great for beginners",
            "Good image quality",
            "Touch screen is responsive",
            "Lightweight and portable",
            "Battery life is decent",
        ],
    },
    FixtureProduct {
        name: "Nikon D3500",
        price: 39990.0,
        features: &[
            "24.2MP DX Sensor",
            "1080p Video Recording",
            "11-point AF System",
            "Guide Mode",
            "Long Battery Life",
        ],
        rating: 4.5,
        reviews: &[
            "Excellent for learning photography",
            "Good image quality",
            "Easy to use",
            "Durable build",
            "Great battery life",
        ],
    },
    FixtureProduct {
        name: "Sony Alpha A7 III",
        price: 149990.0,
        features: &[
            "24.2MP Full-Frame Sensor",
            "4K Video Recording",
            "5-axis Stabilization",
            "Fast AF",
            "Weather Sealed",
        ],
        rating: 4.8,
        reviews: &[
            "Professional-grade camera",
            "Excellent low-light performance",
            "Great video capabilities",
            "Robust build quality",
            "Expensive but worth it",
        ],
    },
    FixtureProduct {
        name: "Fujifilm X-T30",
        price: 69990.0,
        features: &[
            "26.1MP APS-C Sensor",
            "4K Video Recording",
            "Fast AF",
            "Compact Design",
            "Film Simulation Modes",
        ],
        rating: 4.7,
        reviews: &[
            "Great image quality",
            "Compact and portable",
            "Film simulations are excellent",
            "Good for both photos and videos",
            "Battery life could be better",
        ],
    },
];

const TABLETS: &[FixtureProduct] = &[
    FixtureProduct {
        name: "iPad Pro 12.9-inch (2024)",
        price: 119900.0,
        features: &[
            "M2 chip",
            "12.9-inch Liquid Retina XDR display",
            "ProMotion & True Tone",
            "12MP Wide + 10MP Ultra Wide cameras",
            "Face ID",
        ],
        rating: 4.9,
        reviews: &[
            "Incredible performance",
            "Best tablet display ever",
            "Great for creative work",
            "Premium build quality",
            "Excellent for productivity",
        ],
    },
    FixtureProduct {
        name: "Samsung Galaxy Tab S9 Ultra",
        price: 108999.0,
        features: &[
            "Snapdragon 8 Gen 2",
            "14.6-inch Dynamic AMOLED 2X",
            "S Pen included",
            "12MP + 12MP Dual front cameras",
            "IP68 water resistance",
        ],
        rating: 4.8,
        reviews: &[
            "Massive beautiful display",
            "Great for multitasking",
            "S Pen works perfectly",
            "Good battery life",
            "Premium Android tablet",
        ],
    },
    FixtureProduct {
        name: "iPad Air (5th gen)",
        price: 59900.0,
        features: &[
            "M1 chip",
            "10.9-inch Liquid Retina display",
            "Touch ID",
            "12MP Ultra Wide front camera",
            "USB-C",
        ],
        rating: 4.7,
        reviews: &[
            "Great performance",
            "Perfect size for most users",
            "Good value for money",
            "Nice display quality",
            "Versatile device",
        ],
    },
    FixtureProduct {
        name: "Xiaomi Pad 6 Pro",
        price: 29999.0,
        features: &[
            "Snapdragon 8+ Gen 1",
            "11-inch 144Hz LCD",
            "8600mAh battery",
            "13MP rear camera",
            "Quad speakers",
        ],
        rating: 4.5,
        reviews: &[
            "Great value tablet",
            "Smooth performance",
            "Good display quality",
            "Long battery life",
            "MIUI optimized well",
        ],
    },
    FixtureProduct {
        name: "OnePlus Pad",
        price: 37999.0,
        features: &[
            "Dimensity 9000",
            "11.61-inch 144Hz LCD",
            "9510mAh battery",
            "67W SUPERVOOC charging",
            "Dolby Vision",
        ],
        rating: 4.4,
        reviews: &[
            "Premium build quality",
            "Great performance",
            "Good battery life",
            "Nice display",
            "Clean software",
        ],
    },
    FixtureProduct {
        name: "realme Pad 2",
        price: 19999.0,
        features: &[
            "MediaTek Helio G99",
            "11-inch 2K display",
            "8360mAh battery",
            "Quad speakers",
            "33W fast charging",
        ],
        rating: 4.3,
        reviews: &[
            "Good budget tablet",
            "Nice display for price",
            "Decent performance",
            "Good battery life",
            "Value for money",
        ],
    },
];

const PRINTERS: &[FixtureProduct] = &[
    FixtureProduct {
        name: "HP LaserJet Pro M428",
        price: 19990.0,
        features: &[
            "Laser Printing",
            "20 PPM Print Speed",
            "1200 x 1200 dpi",
            "Automatic Duplex",
            "Wi-Fi Connectivity",
        ],
        rating: 4.5,
        reviews: &[
            "Fast printing speed",
            "Good print quality",
            "Reliable performance",
            "Easy to set up",
            "Toner lasts long",
        ],
    },
    FixtureProduct {
        name: "Canon PIXMA TS5370",
        price: 12990.0,
        features: &[
            "Inkjet Printing",
            "Color Printing",
            "4800 x 1200 dpi",
            "Automatic Duplex",
            "Wi-Fi & Bluetooth",
        ],
        rating: 4.3,
        reviews: &[
            "Good for home use",
            "Color prints are vibrant",
            "Easy to use",
            "Ink can be expensive",
            "Wi-Fi setup is simple",
        ],
    },
    FixtureProduct {
        name: "Epson L3150",
        price: 15990.0,
        features: &[
            "EcoTank Technology",
            "Color Printing",
            "5760 x 1440 dpi",
            "Automatic Duplex",
            "Wi-Fi Connectivity",
        ],
        rating: 4.6,
        reviews: &[
            "Very economical to run",
            "Good print quality",
            "Large ink capacity",
            "Initial cost is high",
            "Reliable performance",
        ],
    },
    FixtureProduct {
        name: "Brother DCP-T426W",
        price: 17990.0,
        features: &[
            "Ink Tank System",
            "Color Printing",
            "1200 x 6000 dpi",
            "Automatic Duplex",
            "Wi-Fi & USB Connectivity",
        ],
        rating: 4.4,
        reviews: &[
            "Cost-effective printing",
            "Good for small office",
            "Easy to refill",
            "Print quality is good",
            "Setup is straightforward",
        ],
    },
];

const AIR_CONDITIONERS: &[FixtureProduct] = &[
    FixtureProduct {
        name: "LG 1.5 Ton 5 Star AI Dual Inverter Split AC",
        price: 44990.0,
        features: &[
            "AI Convertible 6-in-1",
            "Dual Inverter Compressor",
            "Ocean Black Protection",
            "HD Filter with Anti-Virus",
            "Smart AC with IoT",
        ],
        rating: 4.7,
        reviews: &[
            "Excellent cooling performance",
            "Very energy efficient",
            "Smart features work well",
            "Quiet operation",
            "Premium build quality",
        ],
    },
    FixtureProduct {
        name: "Samsung 1.5 Ton 5 Star WindFree™ Split AC",
        price: 42990.0,
        features: &[
            "WindFree™ Cooling",
            "Digital Inverter Technology",
            "Triple Protection Filter",
            "Auto Clean",
            "SmartThings App Control",
        ],
        rating: 4.6,
        reviews: &[
            "Gentle cooling is amazing",
            "Great energy savings",
            "Easy to maintain",
            "Good app integration",
            "Premium features",
        ],
    },
    FixtureProduct {
        name: "Daikin 1.5 Ton 5 Star Inverter Split AC",
        price: 39990.0,
        features: &[
            "Coanda Airflow",
            "Inverter Technology",
            "PM 2.5 Filter",
            "Powerful Mode",
            "Auto Restart",
        ],
        rating: 4.8,
        reviews: &[
            "Best cooling performance",
            "Very reliable",
            "Energy efficient",
            "Easy to clean",
            "Worth the investment",
        ],
    },
    FixtureProduct {
        name: "Voltas 1.5 Ton 5 Star Inverter Split AC",
        price: 32990.0,
        features: &[
            "iFeel Technology",
            "Inverter Compressor",
            "Anti-Dust Filter",
            "Sleep Mode",
            "Auto Restart",
        ],
        rating: 4.4,
        reviews: &[
            "Good value for money",
            "Efficient cooling",
            "Quiet operation",
            "Easy to install",
            "Reliable performance",
        ],
    },
    FixtureProduct {
        name: "Blue Star 1.5 Ton 5 Star Inverter Split AC",
        price: 34990.0,
        features: &[
            "Flexi Cool Technology",
            "Inverter Compressor",
            "PM 2.5 Filter",
            "Sleep Mode",
            "Auto Restart",
        ],
        rating: 4.5,
        reviews: &[
            "Great cooling performance",
            "Energy efficient",
            "Good build quality",
            "Easy maintenance",
            "Value for money",
        ],
    },
];
