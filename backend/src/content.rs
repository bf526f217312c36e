// Compiled-in site content. Arabic is the base value of every localized field.

use crate::localize::{Localized, LocalizedList, LocalizedText};
use crate::models::{
    Certificate, CertificateKind, CompanyProfile, CompanyStat, Market, MarketStatus, NewsArticle,
    NewsCategory, Product, ProductCategory,
};

const fn text(ar: &'static str, en: &'static str) -> LocalizedText {
    Localized {
        base: ar,
        en: Some(en),
        es: None,
    }
}

const fn text3(ar: &'static str, en: &'static str, es: &'static str) -> LocalizedText {
    Localized {
        base: ar,
        en: Some(en),
        es: Some(es),
    }
}

const fn list(ar: &'static [&'static str], en: &'static [&'static str]) -> LocalizedList {
    Localized {
        base: ar,
        en: Some(en),
        es: None,
    }
}

const fn list3(
    ar: &'static [&'static str],
    en: &'static [&'static str],
    es: &'static [&'static str],
) -> LocalizedList {
    Localized {
        base: ar,
        en: Some(en),
        es: Some(es),
    }
}

const CARTONS: LocalizedList = list3(
    &["كرتون 10 كجم", "كرتون 20 كجم"],
    &["10 kg carton", "20 kg carton"],
    &["Caja de 10 kg", "Caja de 20 kg"],
);

const IQF_BAGS: LocalizedList = list(
    &["أكياس مجمدة فردياً 1 كجم", "كرتون 10 كجم"],
    &["1 kg IQF bags", "10 kg master carton"],
);

const ICE_BOXES: LocalizedList = list(
    &["صناديق فوم بالثلج 15 كجم"],
    &["15 kg polystyrene boxes on ice"],
);

const YEAR_ROUND: LocalizedText = text3("طوال العام", "Year-round", "Todo el año");

pub static COMPANY: CompanyProfile = CompanyProfile {
    name: text3("أسماك دلتا النيل", "Nile Delta Fisheries", "Pesquerías del Delta del Nilo"),
    legal_name: "Nile Delta Fisheries for Export S.A.E.",
    about: text3(
        "منذ عام 1994 نورّد الأسماك من نهر النيل وساحل البحر المتوسط ومزارع كفر الشيخ، ونجهّزها في مصنعنا بدمياط وفق معايير التصدير الدولية.",
        "Since 1994 we have sourced fish from the Nile, the Mediterranean coast and the farms of Kafr El Sheikh, processing it in our Damietta plant to international export standards.",
        "Desde 1994 compramos pescado del Nilo, de la costa mediterránea y de las granjas de Kafr El Sheikh, y lo procesamos en nuestra planta de Damietta según normas internacionales de exportación.",
    ),
    address: text(
        "المنطقة الصناعية، دمياط الجديدة، مصر",
        "Industrial Zone, New Damietta, Egypt",
    ),
    founded: 1994,
    phone: "+20 57 240 1234",
    email: "export@nildeltafish.example",
    whatsapp: "201001234567",
    working_hours: text(
        "السبت - الخميس، 8 صباحاً - 5 مساءً",
        "Saturday - Thursday, 8 am - 5 pm",
    ),
    stats: &[
        CompanyStat {
            label: text3("سنوات من الخبرة", "Years of experience", "Años de experiencia"),
            value: "30+",
        },
        CompanyStat {
            label: text3("دولة نصدّر إليها", "Export countries", "Países de exportación"),
            value: "22",
        },
        CompanyStat {
            label: text("طن سنوياً", "Tonnes per year"),
            value: "18,000",
        },
    ],
};

pub static PRODUCTS: &[Product] = &[
    Product {
        id: 1,
        slug: "nile-tilapia",
        name: text3("بلطي", "Tilapia", "Tilapia"),
        scientific_name: "Oreochromis niloticus",
        description: text3(
            "بلطي نيلي طازج من مياه النيل، ذو لحم أبيض متماسك وطعم معتدل.",
            "Fresh Nile tilapia with firm white flesh and a mild taste.",
            "Tilapia del Nilo fresca, de carne blanca firme y sabor suave.",
        ),
        category: ProductCategory::River,
        origin: text3("نهر النيل", "River Nile", "Río Nilo"),
        season: YEAR_ROUND,
        sizes: list3(
            &["200-300 جم", "300-500 جم", "500 جم فأكثر"],
            &["200-300 g", "300-500 g", "500 g +"],
            &["200-300 g", "300-500 g", "Más de 500 g"],
        ),
        packaging: CARTONS,
        image: "/images/products/tilapia.jpg",
        featured: true,
    },
    Product {
        id: 2,
        slug: "nile-perch",
        name: text("قشر بياض", "Nile perch"),
        scientific_name: "Lates niloticus",
        description: text(
            "فيليه قشر بياض من بحيرة ناصر، مناسب للشوي والقلي.",
            "Nile perch fillets from Lake Nasser, suited to grilling and frying.",
        ),
        category: ProductCategory::River,
        origin: text("بحيرة ناصر", "Lake Nasser"),
        season: text("مارس - نوفمبر", "March - November"),
        sizes: list(
            &["فيليه 500-1000 جم", "فيليه 1-2 كجم"],
            &["500-1000 g fillets", "1-2 kg fillets"],
        ),
        packaging: IQF_BAGS,
        image: "/images/products/nile-perch.jpg",
        featured: false,
    },
    Product {
        id: 3,
        slug: "catfish",
        name: text("قرموط", "Catfish"),
        scientific_name: "Clarias gariepinus",
        description: text(
            "قرموط نيلي كامل أو منظف، مجمد بسرعة للحفاظ على جودته.",
            "Whole or gutted African catfish, blast-frozen to keep its quality.",
        ),
        category: ProductCategory::River,
        origin: text("دلتا النيل", "Nile Delta"),
        season: YEAR_ROUND,
        sizes: list(&["1-2 كجم", "2-3 كجم"], &["1-2 kg", "2-3 kg"]),
        packaging: IQF_BAGS,
        image: "/images/products/catfish.jpg",
        featured: false,
    },
    Product {
        id: 4,
        slug: "sea-bream",
        name: text3("دنيس", "Gilthead sea bream", "Dorada"),
        scientific_name: "Sparus aurata",
        description: text3(
            "دنيس البحر المتوسط، طازج على الثلج خلال 24 ساعة من الصيد.",
            "Mediterranean sea bream, shipped fresh on ice within 24 hours of harvest.",
            "Dorada del Mediterráneo, enviada fresca en hielo en menos de 24 horas.",
        ),
        category: ProductCategory::Sea,
        origin: text3("البحر المتوسط", "Mediterranean Sea", "Mar Mediterráneo"),
        season: YEAR_ROUND,
        sizes: list(
            &["300-400 جم", "400-600 جم", "600-800 جم"],
            &["300-400 g", "400-600 g", "600-800 g"],
        ),
        packaging: ICE_BOXES,
        image: "/images/products/sea-bream.jpg",
        featured: true,
    },
    Product {
        id: 5,
        slug: "sea-bass",
        name: text3("قاروص", "European sea bass", "Lubina"),
        scientific_name: "Dicentrarchus labrax",
        description: text(
            "قاروص بحري بلحم أبيض رقيق، متاح طازجاً أو مجمداً.",
            "Sea bass with delicate white flesh, available fresh or frozen.",
        ),
        category: ProductCategory::Sea,
        origin: text("ساحل دمياط", "Damietta coast"),
        season: text("أكتوبر - أبريل", "October - April"),
        sizes: list(&["400-600 جم", "600-1000 جم"], &["400-600 g", "600-1000 g"]),
        packaging: ICE_BOXES,
        image: "/images/products/sea-bass.jpg",
        featured: true,
    },
    Product {
        id: 6,
        slug: "sardines",
        name: text("سردين", "Sardines"),
        scientific_name: "Sardinella aurita",
        description: text(
            "سردين البحر المتوسط مجمد كاملاً، مثالي للتعليب والشوي.",
            "Whole frozen Mediterranean sardines for canning and grilling.",
        ),
        category: ProductCategory::Sea,
        origin: text("البحر المتوسط", "Mediterranean Sea"),
        season: text("يونيو - سبتمبر", "June - September"),
        sizes: list(&["20-30 قطعة/كجم"], &["20-30 pcs/kg"]),
        packaging: CARTONS,
        image: "/images/products/sardines.jpg",
        featured: false,
    },
    Product {
        id: 7,
        slug: "grey-mullet",
        name: text3("بوري", "Grey mullet", "Lisa"),
        scientific_name: "Mugil cephalus",
        description: text(
            "بوري مستزرع في أحواض كفر الشيخ، يُصدَّر طازجاً ومجمداً.",
            "Grey mullet farmed in the ponds of Kafr El Sheikh, exported fresh and frozen.",
        ),
        category: ProductCategory::Farmed,
        origin: text("كفر الشيخ", "Kafr El Sheikh"),
        season: text("سبتمبر - فبراير", "September - February"),
        sizes: list(&["500-800 جم", "800 جم فأكثر"], &["500-800 g", "800 g +"]),
        packaging: CARTONS,
        image: "/images/products/grey-mullet.jpg",
        featured: false,
    },
    Product {
        id: 8,
        slug: "farmed-tilapia-fillet",
        name: text("فيليه بلطي مستزرع", "Farmed tilapia fillet"),
        scientific_name: "Oreochromis niloticus",
        description: text(
            "فيليه بلطي منزوع الجلد والعظم من مزارعنا المعتمدة.",
            "Skinless, boneless tilapia fillets from our certified farms.",
        ),
        category: ProductCategory::Farmed,
        origin: text("مزارع كفر الشيخ", "Kafr El Sheikh farms"),
        season: YEAR_ROUND,
        sizes: list(&["3-5 أونصة", "5-7 أونصة"], &["3-5 oz", "5-7 oz"]),
        packaging: IQF_BAGS,
        image: "/images/products/tilapia-fillet.jpg",
        featured: true,
    },
    Product {
        id: 9,
        slug: "feseekh",
        name: Localized {
            base: "فسيخ",
            en: None,
            es: None,
        },
        scientific_name: "Mugil cephalus",
        description: Localized {
            base: "بوري مملح ومخمّر بالطريقة المصرية التقليدية، متوفر موسمياً.",
            en: Some("Traditionally salted and cured mullet, available seasonally."),
            es: None,
        },
        category: ProductCategory::Farmed,
        origin: text("كفر الشيخ", "Kafr El Sheikh"),
        season: text("مارس - أبريل", "March - April"),
        sizes: list(&["1 كجم"], &["1 kg"]),
        packaging: list(&["علب محكمة 1 كجم"], &["1 kg sealed tins"]),
        image: "/images/products/feseekh.jpg",
        featured: false,
    },
];

pub static CERTIFICATES: &[Certificate] = &[
    Certificate {
        id: 1,
        name: text3("ISO 22000", "ISO 22000", "ISO 22000"),
        issuer: text("بيورو فيريتاس", "Bureau Veritas"),
        description: text(
            "نظام إدارة سلامة الغذاء لمصنع دمياط.",
            "Food safety management system for the Damietta plant.",
        ),
        kind: CertificateKind::Safety,
        valid_until: "2027-06-30",
        image: "/images/certificates/iso-22000.png",
    },
    Certificate {
        id: 2,
        name: text("HACCP", "HACCP"),
        issuer: text("الهيئة القومية لسلامة الغذاء", "National Food Safety Authority"),
        description: text(
            "تحليل المخاطر ونقاط التحكم الحرجة في جميع خطوط التجهيز.",
            "Hazard analysis and critical control points across every processing line.",
        ),
        kind: CertificateKind::Safety,
        valid_until: "2026-12-31",
        image: "/images/certificates/haccp.png",
    },
    Certificate {
        id: 3,
        name: text("ISO 9001", "ISO 9001"),
        issuer: text("تي يو في نورد", "TÜV Nord"),
        description: text(
            "نظام إدارة الجودة للتوريد والتجهيز والتصدير.",
            "Quality management system covering sourcing, processing and export.",
        ),
        kind: CertificateKind::Quality,
        valid_until: "2027-03-15",
        image: "/images/certificates/iso-9001.png",
    },
    Certificate {
        id: 4,
        name: text("جلوبال جاب", "GLOBALG.A.P."),
        issuer: text("جلوبال جاب", "GLOBALG.A.P."),
        description: text(
            "ممارسات الاستزراع السمكي الجيدة لمزارع كفر الشيخ.",
            "Good aquaculture practice for the Kafr El Sheikh farms.",
        ),
        kind: CertificateKind::Quality,
        valid_until: "2026-09-01",
        image: "/images/certificates/globalgap.png",
    },
    Certificate {
        id: 5,
        name: text("رقم اعتماد الاتحاد الأوروبي", "EU export approval number"),
        issuer: text("المفوضية الأوروبية", "European Commission"),
        description: text(
            "اعتماد المنشأة للتصدير إلى دول الاتحاد الأوروبي.",
            "Establishment approval for export to the European Union.",
        ),
        kind: CertificateKind::Export,
        valid_until: "2028-01-01",
        image: "/images/certificates/eu-approval.png",
    },
];

pub static MARKETS: &[Market] = &[
    Market {
        id: 1,
        region: text3("دول الخليج", "Gulf states", "Países del Golfo"),
        countries: list(
            &["السعودية", "الإمارات", "الكويت", "قطر", "البحرين", "عُمان"],
            &["Saudi Arabia", "UAE", "Kuwait", "Qatar", "Bahrain", "Oman"],
        ),
        description: text(
            "أكبر أسواقنا، بشحنات طازجة جواً ومجمدة بحراً كل أسبوع.",
            "Our largest market, with weekly fresh air freight and frozen sea freight.",
        ),
        status: MarketStatus::Active,
        since: 1998,
    },
    Market {
        id: 2,
        region: text3("أوروبا", "Europe", "Europa"),
        countries: list3(
            &["إيطاليا", "اليونان", "إسبانيا", "هولندا"],
            &["Italy", "Greece", "Spain", "Netherlands"],
            &["Italia", "Grecia", "España", "Países Bajos"],
        ),
        description: text(
            "دنيس وقاروص طازج لأسواق الجملة في جنوب أوروبا.",
            "Fresh sea bream and sea bass for southern European wholesale markets.",
        ),
        status: MarketStatus::Active,
        since: 2009,
    },
    Market {
        id: 3,
        region: text("شمال أفريقيا", "North Africa"),
        countries: list(&["ليبيا", "تونس", "الجزائر"], &["Libya", "Tunisia", "Algeria"]),
        description: text(
            "بلطي وسردين مجمد بالشاحنات والشحن البحري.",
            "Frozen tilapia and sardines by truck and sea freight.",
        ),
        status: MarketStatus::Active,
        since: 2003,
    },
    Market {
        id: 4,
        region: text("غرب أفريقيا", "West Africa"),
        countries: list(&["نيجيريا", "غانا", "ساحل العاج"], &["Nigeria", "Ghana", "Ivory Coast"]),
        description: text(
            "سوق ناشئ للقرموط والبلطي المجمد.",
            "An emerging market for frozen catfish and tilapia.",
        ),
        status: MarketStatus::Expanding,
        since: 2021,
    },
    Market {
        id: 5,
        region: text("شرق آسيا", "East Asia"),
        countries: list(&["الصين", "هونج كونج"], &["China", "Hong Kong"]),
        description: text(
            "فيليه قشر بياض مجمد لقطاع المطاعم.",
            "Frozen Nile perch fillets for the food-service sector.",
        ),
        status: MarketStatus::Expanding,
        since: 2023,
    },
];

pub static NEWS: &[NewsArticle] = &[
    NewsArticle {
        id: 1,
        slug: "new-iqf-line",
        title: text(
            "تشغيل خط تجميد فردي جديد في دمياط",
            "New IQF freezing line opens in Damietta",
        ),
        excerpt: text(
            "خط جديد يضاعف طاقتنا من الفيليه المجمد.",
            "A new line doubles our frozen fillet capacity.",
        ),
        body: text(
            "بدأ تشغيل خط التجميد السريع الفردي الجديد بطاقة 40 طناً يومياً، ما يضاعف قدرتنا على تلبية طلبات الفيليه المجمد لأسواق الخليج وأوروبا.",
            "Our new individually-quick-frozen line runs at 40 tonnes a day, doubling the frozen fillet volumes we can ship to the Gulf and Europe.",
        ),
        category: NewsCategory::Company,
        published: "2026-02-10",
        image: "/images/news/iqf-line.jpg",
    },
    NewsArticle {
        id: 2,
        slug: "seafood-expo-barcelona",
        title: text3(
            "نلتقي بكم في معرض المأكولات البحرية ببرشلونة",
            "Meet us at Seafood Expo Global in Barcelona",
            "Visítenos en Seafood Expo Global en Barcelona",
        ),
        excerpt: text3(
            "جناحنا في القاعة 3 طوال أيام المعرض.",
            "Find our stand in Hall 3 for the whole show.",
            "Nuestro stand está en el Pabellón 3 durante toda la feria.",
        ),
        body: text3(
            "نعرض هذا العام تشكيلتنا الكاملة من الدنيس والقاروص والبلطي، ويسعد فريق التصدير بلقاء المستوردين لمناقشة عقود الموسم القادم.",
            "This year we are showing our full range of sea bream, sea bass and tilapia, and our export team looks forward to meeting importers about next season's contracts.",
            "Este año presentamos nuestra gama completa de dorada, lubina y tilapia, y nuestro equipo de exportación espera reunirse con importadores para los contratos de la próxima temporada.",
        ),
        category: NewsCategory::Events,
        published: "2026-04-02",
        image: "/images/news/seafood-expo.jpg",
    },
    NewsArticle {
        id: 3,
        slug: "globalgap-renewal",
        title: text("تجديد شهادة جلوبال جاب لمزارعنا", "GLOBALG.A.P. renewed for our farms"),
        excerpt: text(
            "اجتازت مزارع كفر الشيخ تدقيق التجديد دون ملاحظات.",
            "The Kafr El Sheikh farms passed their renewal audit with no findings.",
        ),
        body: text(
            "أكد تدقيق التجديد التزام مزارعنا بممارسات الاستزراع الجيدة في إدارة المياه والأعلاف وتتبع الدفعات.",
            "The renewal audit confirmed our farms' good aquaculture practice in water management, feed and batch traceability.",
        ),
        category: NewsCategory::Company,
        published: "2025-09-05",
        image: "/images/news/globalgap.jpg",
    },
    NewsArticle {
        id: 4,
        slug: "egyptian-aquaculture-growth",
        title: text(
            "الاستزراع السمكي في مصر يواصل النمو",
            "Egyptian aquaculture keeps growing",
        ),
        excerpt: text(
            "مصر تحافظ على مكانتها كأكبر منتج للأسماك المستزرعة في أفريقيا.",
            "Egypt remains Africa's largest producer of farmed fish.",
        ),
        body: text(
            "تشير أحدث الأرقام إلى استمرار نمو إنتاج المزارع السمكية المصرية، بقيادة البلطي والبوري، مع توسع متزايد في أسواق التصدير.",
            "The latest figures show Egyptian fish-farm output still rising, led by tilapia and mullet, with a growing share going to export markets.",
        ),
        category: NewsCategory::Industry,
        published: "2025-12-14",
        image: "/images/news/aquaculture.jpg",
    },
    NewsArticle {
        id: 5,
        slug: "west-africa-office",
        title: text("افتتاح مكتب مبيعات في لاجوس", "Sales office opens in Lagos"),
        excerpt: text(
            "خطوة لدعم عملائنا في غرب أفريقيا عن قرب.",
            "Bringing us closer to our West African customers.",
        ),
        body: text(
            "يتولى المكتب الجديد تنسيق الشحنات وخدمة العملاء في نيجيريا وغانا وساحل العاج.",
            "The new office coordinates shipments and customer service for Nigeria, Ghana and the Ivory Coast.",
        ),
        category: NewsCategory::Company,
        published: "2026-05-20",
        image: "/images/news/lagos-office.jpg",
    },
];
