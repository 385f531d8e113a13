//! The category keyword taxonomy.
//!
//! One versioned table consumed by the categorizer. Table order is the
//! iteration order, which makes tie-breaking deterministic: on equal scores
//! the earlier entry wins. Keep new keywords lowercase.

/// One category with its match weight and keyword set.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub name: &'static str,
    pub weight: f64,
    pub keywords: &'static [&'static str],
}

/// Guaranteed fallback when nothing scores above the threshold.
pub const FALLBACK_CATEGORY: &str = "Others";

pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        name: "Family Support",
        weight: 0.9,
        keywords: &[
            "dad", "mom", "father", "mother", "parents", "family", "gift", "brother", "sister",
            "sibling", "son", "daughter", "wife", "husband", "spouse", "grandfather",
            "grandmother", "grandparents", "uncle", "aunt", "cousin", "nephew", "niece",
            "in-laws", "mother-in-law", "father-in-law", "guardian", "caretaker", "dependents",
            "caregiver", "nanny", "anniversary", "birthday", "reunion", "family gathering",
            "inheritance", "relatives", "next of kin",
        ],
    },
    CategoryRule {
        name: "Food & Dining",
        weight: 0.8,
        keywords: &[
            "restaurant", "food", "dining", "cafe", "hotel", "meal", "fast food", "street food",
            "buffet", "takeaway", "home delivery", "fine dining", "food truck", "catering",
            "brunch", "lunch", "dinner", "breakfast", "snacks", "mcdonalds", "kfc", "dominos",
            "pizza hut", "burger king", "subway", "starbucks", "dunkin", "taco bell", "wendys",
            "baskin robbins", "popeyes", "zomato", "swiggy", "ubereats", "foodpanda", "dunzo",
            "grubhub", "doordash", "deliveroo", "grocery", "supermarket", "bazaar", "vegetables",
            "fruits", "dairy", "bakery", "deli", "spices", "beverages", "chocolate",
        ],
    },
    CategoryRule {
        name: "Transportation",
        weight: 0.85,
        keywords: &[
            "uber", "ola", "lyft", "taxi", "cab", "auto", "rickshaw", "bus", "train", "metro",
            "tram", "ferry", "railway", "station", "petrol", "diesel", "fuel", "lubricant",
            "car wash", "parking", "toll", "fastag", "tyre", "tire", "spare parts", "bicycle",
            "scooter", "motorcycle", "bike",
        ],
    },
    CategoryRule {
        name: "Shopping & Retail",
        weight: 0.75,
        keywords: &[
            "amazon", "flipkart", "myntra", "ajio", "nykaa", "purplle", "firstcry", "shopclues",
            "snapdeal", "paytm mall", "jiomart", "bigbasket", "grofers", "zepto", "blinkit",
            "instamart", "bigbazaar", "dmart", "reliance fresh", "spencer", "easyday",
            "clothing", "apparel", "fashion", "accessories", "footwear", "cosmetics", "beauty",
            "electronics", "gadgets", "mobiles", "laptops", "computers", "tablets", "furniture",
            "decor", "kitchen", "bedding", "toys", "games", "stationery", "hardware", "mart",
            "store", "shop", "purchase", "ecommerce",
        ],
    },
    CategoryRule {
        name: "Entertainment & Leisure",
        weight: 0.7,
        keywords: &[
            "netflix", "amazon prime", "hotstar", "sony liv", "zee5", "voot", "altbalaji",
            "mx player", "youtube premium", "spotify", "apple music", "gaana", "wynk",
            "jiosaavn", "hungama", "bookmyshow", "inox", "pvr", "cinepolis", "imax", "theatre",
            "cinema", "movie", "concert", "amusement park", "theme park", "water park", "zoo",
            "aquarium", "museum", "gallery", "exhibition", "carnival", "festival", "streaming",
        ],
    },
    CategoryRule {
        name: "Health & Medical",
        weight: 0.9,
        keywords: &[
            "hospital", "clinic", "doctor", "physician", "surgeon", "dentist", "ophthalmologist",
            "optometrist", "pharmacy", "medical store", "chemist", "drugstore", "medicine",
            "prescription", "vaccination", "immunization", "checkup", "diagnosis", "therapy",
            "surgery", "pathology", "radiology", "x-ray", "ultrasound", "mri", "ct scan", "ecg",
            "blood test", "ambulance", "urgent care", "first aid", "ointment", "tablet",
            "capsule", "syrup", "injection",
        ],
    },
    CategoryRule {
        name: "Education & Learning",
        weight: 0.85,
        keywords: &[
            "school", "college", "university", "institute", "academy", "course", "lecture",
            "seminar", "workshop", "tutorial", "tuition", "coaching", "mentoring", "counseling",
            "textbook", "study material", "notebook", "uniform", "admission fee",
            "examination fee", "library", "laboratory", "scholarship", "certificate", "diploma",
            "degree",
        ],
    },
    CategoryRule {
        name: "Utilities & Bills",
        weight: 0.8,
        keywords: &[
            "electricity", "power", "energy", "water bill", "gas bill", "lpg", "cng",
            "telephone", "mobile bill", "internet", "broadband", "cable", "satellite", "dth",
            "landline", "postpaid", "prepaid", "newspaper", "magazine", "subscription",
            "membership", "rent", "lease", "maintenance", "sanitation", "garbage", "sewage",
            "airtel", "jio", "vodafone", "bsnl", "tata sky", "d2h",
        ],
    },
    CategoryRule {
        name: "Travel & Tourism",
        weight: 0.75,
        keywords: &[
            "flight", "airline", "airport", "resort", "motel", "inn", "lodge", "guest house",
            "hostel", "villa", "cottage", "camping", "caravan", "tour", "package", "holiday",
            "vacation", "trip", "journey", "voyage", "safari", "cruise", "yacht", "passport",
            "visa", "makemytrip", "goibibo", "cleartrip", "yatra", "oyo", "airbnb",
        ],
    },
    CategoryRule {
        name: "Investments & Savings",
        weight: 0.9,
        keywords: &[
            "savings", "fixed deposit", "recurring deposit", "investment", "stock", "share",
            "equity", "mutual fund", "etf", "bonds", "debentures", "nps", "ppf", "epf",
            "life insurance", "health insurance", "term insurance", "ulip", "endowment",
            "pension", "annuity", "retirement", "dividend", "interest credited", "sip",
        ],
    },
    CategoryRule {
        name: "UPI & Wallets",
        weight: 0.9,
        keywords: &[
            "paytm", "phonepe", "google pay", "gpay", "bhim", "amazon pay", "mobikwik",
            "freecharge", "airtel money", "jiomoney", "payzapp", "ybl", "upi", "wallet",
            "qr code", "scan and pay", "vpa", "imps", "neft", "rtgs", "bharat qr",
        ],
    },
    CategoryRule {
        name: "Indian Banks",
        weight: 0.9,
        keywords: &[
            "sbi", "state bank of india", "hdfc", "icici", "axis", "kotak", "pnb", "canara",
            "union bank", "bank of baroda", "idfc", "yes bank", "indusind", "uco",
            "central bank", "bank of india", "rbl", "federal bank", "karur vysya", "dcb",
            "south indian bank", "bandhan", "idbi", "au small finance", "equitas", "ujjivan",
            "fino payments", "india post payments",
        ],
    },
    CategoryRule {
        name: "Gold & Jewellery",
        weight: 0.7,
        keywords: &[
            "tanishq", "kalyan", "malabar", "pc jeweller", "joyallukas", "tribhovandas",
            "senco", "tbz", "bhima", "caratlane", "bluestone", "jewellery", "jewelry", "gold",
            "silver", "diamond", "platinum", "bullion", "ornament", "bangle", "necklace",
            "earring", "bracelet", "mangalsutra",
        ],
    },
    CategoryRule {
        name: "Mutual Funds & Stocks",
        weight: 0.8,
        keywords: &[
            "zerodha", "groww", "upstox", "icici direct", "hdfc securities", "angel broking",
            "angel one", "motilal oswal", "sharekhan", "5paisa", "kotak securities",
            "axis direct", "franklin templeton", "nippon india mf", "mirae asset", "uti mf",
        ],
    },
    CategoryRule {
        name: "Government Services",
        weight: 0.8,
        keywords: &[
            "income tax", "gst", "epfo", "uidai", "passport seva", "pan card", "aadhaar",
            "voter id", "driving license", "parivahan", "digilocker", "bharat billpay",
            "bharat gas", "indane", "hp gas", "municipal", "property tax", "irctc",
            "post office", "india post", "court fee", "stamp duty", "ration card",
            "gram panchayat", "rto", "govt", "gov.",
        ],
    },
    CategoryRule {
        name: "Recharge & Bill Payment",
        weight: 0.8,
        keywords: &[
            "recharge", "topup", "top-up", "billdesk", "bill payment", "insurance premium",
            "loan emi", "credit card bill", "metro card", "smart card", "utility bill", "emi",
            "installment", "renewal",
        ],
    },
    CategoryRule {
        name: "Credit Cards",
        weight: 0.8,
        keywords: &[
            "credit card", "debit card", "mastercard", "visa", "rupay", "maestro",
            "diners club", "amex", "platinum card", "gold card", "signature card",
            "infinite card", "forex card", "travel card", "fuel card", "reward card",
            "cashback card", "add-on card", "contactless card", "virtual card",
        ],
    },
    CategoryRule {
        name: "Salary & Income",
        weight: 0.8,
        keywords: &[
            "salary", "income", "stipend", "payroll", "cashfree", "refund", "reimbursement",
            "bonus", "incentive", "commission",
        ],
    },
];
