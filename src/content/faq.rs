use axum::Json;

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct Question {
	pub question: &'static str,
	pub answer: &'static str,
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct FaqCategory {
	pub title: &'static str,
	pub questions: &'static [Question],
}

pub static FAQ: [FaqCategory; 4] = [
	FaqCategory {
		title: "Booking Process",
		questions: &[
			Question {
				question: "How do I make a car reservation?",
				answer: "Making a reservation is simple:\n\n• Select your desired car model\n• Choose pickup and return dates\n• Enter your details\n• Confirm payment information\n\nYou'll receive instant confirmation via email.",
			},
			Question {
				question: "Can I modify my reservation?",
				answer: "Yes, you can modify your reservation through our website or by contacting customer service. Changes made 48 hours before pickup are free of charge.",
			},
		],
	},
	FaqCategory {
		title: "Rental Requirements",
		questions: &[
			Question {
				question: "What documents do I need to rent a car?",
				answer: "Required documents include:\n\n• Valid driver's license\n• Credit card in renter's name\n• Proof of insurance\n• Government-issued ID\n\nInternational renters may need additional documentation.",
			},
			Question {
				question: "What are the age requirements?",
				answer: "• Minimum age: 21 years\n• Under 25: Young driver surcharge applies\n• Luxury vehicles: 25+ years required\n• Senior drivers: No upper age limit with valid license",
			},
		],
	},
	FaqCategory {
		title: "Payments & Insurance",
		questions: &[
			Question {
				question: "What payment methods are accepted?",
				answer: "We accept:\n\n• Major credit cards\n• Debit cards (with additional verification)\n• Digital wallets\n• Corporate accounts\n\nCash payments are not accepted.",
			},
			Question {
				question: "What insurance options are available?",
				answer: "We offer comprehensive coverage options:\n\n• Basic insurance (included)\n• Full coverage protection\n• Personal accident insurance\n• Tire and windshield protection",
			},
		],
	},
	FaqCategory {
		title: "Policies & Protection",
		questions: &[
			Question {
				question: "What is your fuel policy?",
				answer: "Our fuel policy is simple:\n\n• Cars provided with full tank\n• Return with full tank\n• Missing fuel charged at market rate\n• Prepaid fuel option available",
			},
			Question {
				question: "What happens if I return late?",
				answer: "• 29-minute grace period\n• Hourly charges apply after grace period\n• Full day rate for significant delays\n• Early returns do not qualify for refunds",
			},
		],
	},
];

pub async fn get_faq() -> Json<&'static [FaqCategory]> {
	Json(&FAQ[..])
}
