use axum::{
	extract::{rejection::QueryRejection, Query, State},
	Json,
};

use crate::{
	cars::{Car, Category, Fuel},
	error::{ApiError, ApiResult},
	AppState,
};

pub const PRICE_MIN: u32 = 50;
pub const PRICE_MAX: u32 = 300;
pub const PRICE_STEP: u32 = 10;

/// The "no restriction" choice in the category and fuel selectors.
pub const ANY: &str = "All";

pub const NO_MATCHES: &str = "No cars found matching your filters.";

/// Edit distance under which a fleet name is offered as a "did you mean".
const SUGGESTION_DISTANCE: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogFilter {
	pub search: String,
	/// `None` is "All".
	pub category: Option<Category>,
	/// `None` is "All".
	pub fuel: Option<Fuel>,
	pub max_price: f64,
}

impl Default for CatalogFilter {
	fn default() -> Self {
		CatalogFilter {
			search: String::new(),
			category: None,
			fuel: None,
			max_price: f64::from(PRICE_MAX),
		}
	}
}

impl CatalogFilter {
	pub fn matches(&self, car: &Car) -> bool {
		self.matches_term(car, &self.search.trim().to_lowercase())
	}

	fn matches_term(&self, car: &Car, lowered_term: &str) -> bool {
		(lowered_term.is_empty() || car.name.to_lowercase().contains(lowered_term))
			&& self.category.map_or(true, |category| car.category == category)
			&& self.fuel.map_or(true, |fuel| car.features.fuel == fuel)
			&& f64::from(car.price) <= self.max_price
	}
}

/// Cars passing every predicate of `filter`, in their original order.
pub fn query<'a>(cars: &'a [Car], filter: &CatalogFilter) -> Vec<&'a Car> {
	let term = filter.search.trim().to_lowercase();
	cars.iter().filter(|car| filter.matches_term(car, &term)).collect()
}

/// Fleet names close to `term`, compared against the whole name and each word of it.
pub fn suggestions(cars: &[Car], term: &str) -> Vec<String> {
	let term = term.trim().to_lowercase();
	if term.is_empty() {
		return Vec::new();
	}
	let mut names: Vec<String> = Vec::new();
	for car in cars {
		let name = car.name.to_lowercase();
		let close = levenshtein::levenshtein(&name, &term) <= SUGGESTION_DISTANCE
			|| name.split_whitespace().any(|word| levenshtein::levenshtein(word, &term) <= SUGGESTION_DISTANCE);
		if close && !names.contains(&car.name) {
			names.push(car.name.clone());
		}
	}
	names
}

/// Raw query string of `GET /cars/search`. Every field is optional.
#[derive(serde::Deserialize, Debug, Default)]
pub struct FilterParams {
	pub search: Option<String>,
	pub category: Option<String>,
	pub fuel: Option<String>,
	pub max_price: Option<String>,
}

impl TryFrom<FilterParams> for CatalogFilter {
	type Error = ApiError;

	fn try_from(params: FilterParams) -> Result<Self, Self::Error> {
		let defaults = CatalogFilter::default();
		let category = match params.category.as_deref().map(str::trim) {
			None | Some("") | Some(ANY) => None,
			Some(label) => Some(label.parse::<Category>().map_err(|e| ApiError::InvalidFilter(format!("category: {}", e)))?),
		};
		let fuel = match params.fuel.as_deref().map(str::trim) {
			None | Some("") | Some(ANY) => None,
			Some(label) => Some(label.parse::<Fuel>().map_err(|e| ApiError::InvalidFilter(format!("fuel: {}", e)))?),
		};
		let max_price = match params.max_price.as_deref().map(str::trim) {
			None | Some("") => defaults.max_price,
			Some(raw) => {
				let price: f64 = raw
					.parse()
					.map_err(|_| ApiError::InvalidFilter(format!("max_price '{}' is not a number", raw)))?;
				if !price.is_finite() || price < 0.0 {
					return Err(ApiError::InvalidFilter(format!("max_price '{}' must be a non-negative number", raw)));
				}
				price
			}
		};
		Ok(CatalogFilter {
			search: params.search.unwrap_or_default(),
			category,
			fuel,
			max_price,
		})
	}
}

#[derive(serde::Serialize, Debug)]
pub struct SearchResult {
	pub cars: Vec<Car>,
	pub count: usize,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub message: Option<&'static str>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub suggestions: Vec<String>,
}

pub async fn search(state: State<AppState>, params: Result<Query<FilterParams>, QueryRejection>) -> ApiResult<Json<SearchResult>> {
	let Query(params) = params?;
	let filter = CatalogFilter::try_from(params)?;
	let cars: Vec<Car> = query(state.fleet.cars(), &filter).into_iter().cloned().collect();
	let count = cars.len();
	let (message, suggestions) = if count == 0 {
		(Some(NO_MATCHES), suggestions(state.fleet.cars(), &filter.search))
	} else {
		(None, Vec::new())
	};
	log::debug!("catalog query {:?} matched {} cars", filter, count);
	Ok(Json(SearchResult { cars, count, message, suggestions }))
}

#[derive(serde::Serialize, Debug)]
pub struct PriceRange {
	pub min: u32,
	pub max: u32,
	pub step: u32,
}

#[derive(serde::Serialize, Debug)]
pub struct FilterDefaults {
	pub search: &'static str,
	pub category: &'static str,
	pub fuel: &'static str,
	pub max_price: u32,
}

#[derive(serde::Serialize, Debug)]
pub struct FilterOptions {
	pub categories: Vec<&'static str>,
	pub fuels: Vec<&'static str>,
	pub price: PriceRange,
	pub defaults: FilterDefaults,
}

pub fn filter_options() -> FilterOptions {
	FilterOptions {
		categories: std::iter::once(ANY).chain(Category::ALL.iter().map(Category::as_str)).collect(),
		fuels: std::iter::once(ANY).chain(Fuel::ALL.iter().map(Fuel::as_str)).collect(),
		price: PriceRange {
			min: PRICE_MIN,
			max: PRICE_MAX,
			step: PRICE_STEP,
		},
		defaults: FilterDefaults {
			search: "",
			category: ANY,
			fuel: ANY,
			max_price: PRICE_MAX,
		},
	}
}

pub async fn get_filter_options() -> Json<FilterOptions> {
	Json(filter_options())
}
