//! Slide Catalog
//!
//! The destinations, in display order. The index of a slide is also the key
//! of its section and of its timelines.

use crate::models::Slide;

pub static SLIDES: [Slide; 5] = [
    Slide {
        image: "/1.png",
        title: "SAINT ANTÃ–NEN",
        location: "Switzerland Alps",
        description: "The journey to Machu Picchu typically starts in the mountain city of Cusco, which was the capital city of the Inca Empire",
    },
    Slide {
        image: "/2.png",
        title: "The Grand Canyon",
        location: "Arizona",
        description: "The earth's geological history opens before your eyes in a mile-deep chasm",
    },
    Slide {
        image: "/3.png",
        title: "Masai Mara",
        location: "Kenya",
        description: "Wild animals in their natural environment, luxury safari lodges",
    },
    Slide {
        image: "/4.png",
        title: "Angkor Wat",
        location: "Cambodia",
        description: "A stunning ancient jungle city with hundreds of intricately constructed temples",
    },
    Slide {
        image: "/7.png",
        title: "Bali",
        location: "Indonesia",
        description: "Tropical beaches, volcano hikes, ancient temples, and friendly people",
    },
];

/// `(index, slide)` pairs in display order
pub fn sections() -> impl Iterator<Item = (usize, &'static Slide)> {
    SLIDES.iter().enumerate()
}

/// DOM id of the section for a slide index
pub fn section_id(index: usize) -> String {
    format!("section-{}", index)
}
