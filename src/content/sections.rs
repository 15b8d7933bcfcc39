use crate::models::{Dish, Feature, Localized, Slide};

pub static HERO_SLIDES: [Slide; 6] = [
    Slide {
        image: "/images/hero/luxury-beach-villa-zihuatanejo-1.webp",
        title_key: "hero-slide1-title",
        caption_key: "hero-slide1-caption",
        alt_key: "hero-slide1-alt",
    },
    Slide {
        image: "/images/hero/luxury-beach-villa-zihuatanejo-2.webp",
        title_key: "hero-slide2-title",
        caption_key: "hero-slide2-caption",
        alt_key: "hero-slide2-alt",
    },
    Slide {
        image: "/images/hero/luxury-beach-villa-zihuatanejo-3.webp",
        title_key: "hero-slide3-title",
        caption_key: "hero-slide3-caption",
        alt_key: "hero-slide3-alt",
    },
    Slide {
        image: "/images/hero/luxury-beach-villa-zihuatanejo-4.webp",
        title_key: "hero-slide4-title",
        caption_key: "hero-slide4-caption",
        alt_key: "hero-slide4-alt",
    },
    Slide {
        image: "/images/hero/luxury-beach-villa-zihuatanejo-5.webp",
        title_key: "hero-slide5-title",
        caption_key: "hero-slide5-caption",
        alt_key: "hero-slide5-alt",
    },
    Slide {
        image: "/images/hero/luxury-beach-villa-zihuatanejo-6.webp",
        title_key: "hero-slide6-title",
        caption_key: "hero-slide6-caption",
        alt_key: "hero-slide6-alt",
    },
];

pub static ABOUT_IMAGES: [&str; 10] = [
    "/images/hero/sous-hero/luxury-beach-villa-boutique-hotel-zihuatanejo-ixtapa-mexico-1.webp",
    "/images/hero/sous-hero/luxury-beach-villa-boutique-hotel-zihuatanejo-ixtapa-mexico-2.webp",
    "/images/hero/sous-hero/luxury-beach-villa-boutique-hotel-zihuatanejo-ixtapa-mexico-3.webp",
    "/images/hero/sous-hero/luxury-beach-villa-boutique-hotel-zihuatanejo-ixtapa-mexico-4.webp",
    "/images/hero/sous-hero/luxury-beach-villa-boutique-hotel-zihuatanejo-ixtapa-mexico-5.webp",
    "/images/hero/sous-hero/luxury-beach-villa-boutique-hotel-zihuatanejo-ixtapa-mexico-6.webp",
    "/images/hero/sous-hero/luxury-beach-villa-boutique-hotel-zihuatanejo-ixtapa-mexico-7.webp",
    "/images/hero/sous-hero/luxury-beach-villa-boutique-hotel-zihuatanejo-ixtapa-mexico-8.webp",
    "/images/hero/sous-hero/luxury-beach-villa-boutique-hotel-zihuatanejo-ixtapa-mexico-9.webp",
    "/images/hero/sous-hero/luxury-beach-villa-boutique-hotel-zihuatanejo-ixtapa-mexico-10.webp",
];

pub static SEA_FEATURES: [Feature; 4] = [
    Feature {
        image: "/images/embraced/palapa-luxury-hotel-beach-lounge-zihuatanejo-ixtapa-1.webp",
        title: None,
    },
    Feature {
        image: "/images/embraced/palapa-luxury-hotel-beach-lounge-zihuatanejo-ixtapa-2.webp",
        title: None,
    },
    Feature {
        image: "/images/embraced/palapa-luxury-hotel-beach-lounge-zihuatanejo-ixtapa-3.webp",
        title: None,
    },
    Feature {
        image: "/images/embraced/palapa-luxury-hotel-beach-lounge-zihuatanejo-ixtapa-4.webp",
        title: None,
    },
];

pub static DISHES: [Dish; 8] = [
    Dish {
        name: Localized {
            en: "Local Breakfast",
            es: "Desayuno local",
        },
        image: "/images/cuisines/romantic-luxury-boutique-hotel-zihuatanejo-ixtapa-mexico-1.webp",
    },
    Dish {
        name: Localized {
            en: "Fresh Ingredients",
            es: "Ingredientes frescos",
        },
        image: "/images/cuisines/romantic-luxury-boutique-hotel-zihuatanejo-ixtapa-mexico-2.webp",
    },
    Dish {
        name: Localized {
            en: "Local Specialties",
            es: "Especialidades locales",
        },
        image: "/images/cuisines/romantic-luxury-boutique-hotel-zihuatanejo-ixtapa-mexico-3.webp",
    },
    Dish {
        name: Localized {
            en: "Traditional Dishes",
            es: "Platillos tradicionales",
        },
        image: "/images/cuisines/romantic-luxury-boutique-hotel-zihuatanejo-ixtapa-mexico-4.webp",
    },
    Dish {
        name: Localized {
            en: "Sunset Dinner",
            es: "Cena al atardecer",
        },
        image: "/images/cuisines/romantic-luxury-boutique-hotel-zihuatanejo-ixtapa-mexico-7.webp",
    },
    Dish {
        name: Localized {
            en: "Beach Dining",
            es: "Cena junto a la playa",
        },
        image: "/images/cuisines/romantic-luxury-boutique-hotel-zihuatanejo-ixtapa-mexico-8.webp",
    },
    Dish {
        name: Localized {
            en: "Mexican Flavors",
            es: "Sabores mexicanos",
        },
        image: "/images/cuisines/romantic-luxury-boutique-hotel-zihuatanejo-ixtapa-mexico-9.webp",
    },
    Dish {
        name: Localized {
            en: "Local Desserts",
            es: "Postres locales",
        },
        image: "/images/cuisines/romantic-luxury-boutique-hotel-zihuatanejo-ixtapa-mexico-10.webp",
    },
];
