use axum::Json;

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct Testimonial {
	pub id: u32,
	pub name: &'static str,
	pub role: &'static str,
	pub image: &'static str,
	pub rating: u8,
	pub comment: &'static str,
	pub car_rented: &'static str,
	pub date: &'static str,
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct Stat {
	pub value: &'static str,
	pub label: &'static str,
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct Highlight {
	pub title: &'static str,
	pub count: u32,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
	Testimonial {
		id: 1,
		name: "Sarah Johnson",
		role: "Business Traveler",
		image: "/path/to/avatar1.jpg",
		rating: 5,
		comment: "The best car rental experience I've ever had! The process was seamless from start to finish. The car was immaculate and the customer service was exceptional.",
		car_rented: "Tesla Model 3",
		date: "January 2024",
	},
	Testimonial {
		id: 2,
		name: "Michael Chen",
		role: "Family Vacation",
		image: "/path/to/avatar2.jpg",
		rating: 5,
		comment: "Perfect for our family vacation! The SUV was spacious, clean, and well-maintained. The staff was incredibly helpful with car seat installation.",
		car_rented: "Toyota Highlander",
		date: "December 2023",
	},
	Testimonial {
		id: 3,
		name: "Emma Davis",
		role: "Weekend Getaway",
		image: "/path/to/avatar3.jpg",
		rating: 4,
		comment: "Great service and competitive prices. The pickup and drop-off process was quick and efficient. Will definitely use again!",
		car_rented: "BMW 3 Series",
		date: "February 2024",
	},
];

pub const STATS: [Stat; 4] = [
	Stat { value: "15K+", label: "Happy Customers" },
	Stat { value: "4.9", label: "Average Rating" },
	Stat { value: "98%", label: "Satisfaction Rate" },
	Stat { value: "24/7", label: "Customer Support" },
];

pub const HIGHLIGHTS: [Highlight; 4] = [
	Highlight { title: "Exceptional Service", count: 2481 },
	Highlight { title: "Clean Vehicles", count: 1938 },
	Highlight { title: "Easy Booking", count: 1756 },
	Highlight { title: "Great Value", count: 1542 },
];

#[derive(serde::Serialize, Debug)]
pub struct Testimonials {
	pub testimonials: Vec<Testimonial>,
	pub average_rating: f64,
	pub stats: Vec<Stat>,
	pub highlights: Vec<Highlight>,
}

/// Mean star rating, rounded to one decimal. Zero when there are no testimonials.
pub fn average_rating(testimonials: &[Testimonial]) -> f64 {
	if testimonials.is_empty() {
		return 0.0;
	}
	let total: u32 = testimonials.iter().map(|t| u32::from(t.rating)).sum();
	let mean = f64::from(total) / testimonials.len() as f64;
	(mean * 10.0).round() / 10.0
}

pub async fn get_testimonials() -> Json<Testimonials> {
	Json(Testimonials {
		testimonials: TESTIMONIALS.to_vec(),
		average_rating: average_rating(&TESTIMONIALS),
		stats: STATS.to_vec(),
		highlights: HIGHLIGHTS.to_vec(),
	})
}
