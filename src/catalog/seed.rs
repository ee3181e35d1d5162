use crate::models::{Amenity, Property};

fn images(first: &str) -> Vec<String> {
    let gallery = [
        first,
        "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=600",
        "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?w=600",
        "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?w=600",
    ];
    let mut unique: Vec<String> = Vec::with_capacity(gallery.len());
    for url in gallery {
        if !unique.iter().any(|seen| seen == url) {
            unique.push(url.to_string());
        }
    }
    unique
}

struct Listing<'a> {
    id: &'a str,
    title: &'a str,
    location: &'a str,
    price: f64,
    rating: f64,
    reviews: u32,
    cover: &'a str,
    amenities: &'a [Amenity],
    availability: bool,
    rooms: (u32, u32, u32),
    description: &'a str,
    host: (&'a str, &'a str),
}

impl Listing<'_> {
    fn build(self) -> Property {
        let (bedrooms, bathrooms, max_guests) = self.rooms;
        Property {
            id: self.id.to_string(),
            title: self.title.to_string(),
            location: self.location.to_string(),
            price: self.price,
            rating: self.rating,
            reviews: self.reviews,
            images: images(self.cover),
            amenities: self.amenities.to_vec(),
            availability: self.availability,
            bedrooms,
            bathrooms,
            max_guests,
            description: self.description.to_string(),
            host_id: self.host.0.to_string(),
            host_name: self.host.1.to_string(),
        }
    }
}

/// Built-in New York catalog used when no catalog file is configured
pub fn seed_properties() -> Vec<Property> {
    vec![
        Listing {
            id: "1",
            title: "Modern Downtown Loft",
            location: "Manhattan, New York",
            price: 180.0,
            rating: 4.8,
            reviews: 124,
            cover: "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=600",
            amenities: &[Amenity::Wifi, Amenity::Parking, Amenity::Coffee],
            availability: true,
            rooms: (2, 2, 4),
            description: "Modern loft with floor-to-ceiling windows, exposed brick and a full kitchen.",
            host: ("host1", "Sarah Johnson"),
        }
        .build(),
        Listing {
            id: "2",
            title: "Cozy Studio in Historic District",
            location: "Brooklyn, New York",
            price: 120.0,
            rating: 4.6,
            reviews: 89,
            cover: "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?w=600",
            amenities: &[Amenity::Wifi, Amenity::Coffee],
            availability: true,
            rooms: (1, 1, 2),
            description: "Studio with original hardwood floors, walking distance to the subway.",
            host: ("host2", "Michael Chen"),
        }
        .build(),
        Listing {
            id: "3",
            title: "Luxury Penthouse Suite",
            location: "Midtown, New York",
            price: 350.0,
            rating: 4.9,
            reviews: 203,
            cover: "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?w=600",
            amenities: &[Amenity::Wifi, Amenity::Parking, Amenity::Coffee],
            availability: false,
            rooms: (3, 3, 6),
            description: "Penthouse with panoramic views, a private terrace and concierge service.",
            host: ("host3", "Emma Rodriguez"),
        }
        .build(),
        Listing {
            id: "4",
            title: "Charming Garden Apartment",
            location: "Queens, New York",
            price: 95.0,
            rating: 4.4,
            reviews: 67,
            cover: "https://images.unsplash.com/photo-1493809842364-78817add7ffb?w=600",
            amenities: &[Amenity::Wifi, Amenity::Parking],
            availability: true,
            rooms: (2, 1, 4),
            description: "Garden apartment with private outdoor space in a quiet neighborhood.",
            host: ("host4", "David Park"),
        }
        .build(),
        Listing {
            id: "5",
            title: "Sleek Business District Flat",
            location: "Financial District, New York",
            price: 200.0,
            rating: 4.7,
            reviews: 156,
            cover: "https://images.unsplash.com/photo-1505693416388-ac5ce068fe85?w=600",
            amenities: &[Amenity::Wifi, Amenity::Coffee],
            availability: true,
            rooms: (1, 1, 2),
            description: "Flat for business travelers, steps from Wall Street.",
            host: ("host5", "Lisa Thompson"),
        }
        .build(),
        Listing {
            id: "6",
            title: "Artist's Creative Space",
            location: "Williamsburg, Brooklyn",
            price: 140.0,
            rating: 4.5,
            reviews: 92,
            cover: "https://images.unsplash.com/photo-1484101403633-562f891dc89a?w=600",
            amenities: &[Amenity::Wifi],
            availability: true,
            rooms: (1, 1, 3),
            description: "Artist's loft near galleries, restaurants and nightlife.",
            host: ("host6", "Alex Rivera"),
        }
        .build(),
    ]
}
