use axum::Json;

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct Service {
	pub title: &'static str,
	pub description: &'static str,
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct Step {
	pub order: u8,
	pub title: &'static str,
	pub description: &'static str,
}

pub const CORE_SERVICES: [Service; 4] = [
	Service {
		title: "Secure Booking",
		description: "Advanced security measures for safe transactions",
	},
	Service {
		title: "Wide Selection",
		description: "Diverse fleet of vehicles for every need",
	},
	Service {
		title: "24/7 Support",
		description: "Round-the-clock customer assistance",
	},
	Service {
		title: "Easy Payments",
		description: "Flexible and secure payment options",
	},
];

pub const ADVANCED_SERVICES: [Service; 4] = [
	Service {
		title: "Real-time Availability",
		description: "Check car availability instantly with live updates",
	},
	Service {
		title: "Flexible Duration",
		description: "Rent cars from hours to months with flexible terms",
	},
	Service {
		title: "Admin Analytics",
		description: "Comprehensive dashboards with insights",
	},
	Service {
		title: "Priority Support",
		description: "Dedicated support for premium users",
	},
];

pub const BOOKING_STEPS: [Step; 3] = [
	Step {
		order: 1,
		title: "Choose Location",
		description: "Select pickup location and date",
	},
	Step {
		order: 2,
		title: "Pick Your Car",
		description: "Browse and choose the perfect vehicle",
	},
	Step {
		order: 3,
		title: "Confirm & Drive",
		description: "Pay securely and enjoy the ride",
	},
];

// Home page "How it works"
pub const HOW_IT_WORKS: [Step; 4] = [
	Step {
		order: 1,
		title: "Select Your Car",
		description: "Choose from our wide range of premium vehicles for any occasion",
	},
	Step {
		order: 2,
		title: "Pick-up Location",
		description: "Select from our numerous convenient pick-up and drop-off locations",
	},
	Step {
		order: 3,
		title: "Pick-up Date",
		description: "Choose your rental duration and preferred pick-up timing",
	},
	Step {
		order: 4,
		title: "Make Payment",
		description: "Quick and secure payment with multiple payment options",
	},
];

#[derive(serde::Serialize, Debug)]
pub struct Services {
	pub core: Vec<Service>,
	pub advanced: Vec<Service>,
	pub booking_steps: Vec<Step>,
	pub how_it_works: Vec<Step>,
}

pub async fn get_services() -> Json<Services> {
	Json(Services {
		core: CORE_SERVICES.to_vec(),
		advanced: ADVANCED_SERVICES.to_vec(),
		booking_steps: BOOKING_STEPS.to_vec(),
		how_it_works: HOW_IT_WORKS.to_vec(),
	})
}
