use std::{collections::HashSet, fmt, fs, path::Path as FsPath, str::FromStr};

use anyhow::{bail, Context};
use axum::{
	extract::{Path, State},
	Json,
};

use crate::{
	error::{ApiError, ApiResult},
	AppState,
};

const EMBEDDED_FLEET: &str = include_str!("../../data/fleet.json");

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
	Sedan,
	#[serde(rename = "SUV")]
	Suv,
	Luxury,
	Sports,
}

impl Category {
	pub const ALL: [Category; 4] = [Category::Sedan, Category::Suv, Category::Luxury, Category::Sports];

	pub fn as_str(&self) -> &'static str {
		match self {
			Category::Sedan => "Sedan",
			Category::Suv => "SUV",
			Category::Luxury => "Luxury",
			Category::Sports => "Sports",
		}
	}
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fuel {
	Petrol,
	Diesel,
	Hybrid,
	Electric,
}

impl Fuel {
	pub const ALL: [Fuel; 4] = [Fuel::Petrol, Fuel::Diesel, Fuel::Hybrid, Fuel::Electric];

	pub fn as_str(&self) -> &'static str {
		match self {
			Fuel::Petrol => "Petrol",
			Fuel::Diesel => "Diesel",
			Fuel::Hybrid => "Hybrid",
			Fuel::Electric => "Electric",
		}
	}
}

/// Labels are matched exactly, the way the catalog page's select options compare.
#[derive(Debug, PartialEq, Eq)]
pub struct UnknownLabel(pub String);

impl fmt::Display for UnknownLabel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "unknown label '{}'", self.0)
	}
}

impl FromStr for Category {
	type Err = UnknownLabel;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Category::ALL.into_iter().find(|c| c.as_str() == s).ok_or_else(|| UnknownLabel(s.to_owned()))
	}
}

impl FromStr for Fuel {
	type Err = UnknownLabel;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Fuel::ALL.into_iter().find(|f| f.as_str() == s).ok_or_else(|| UnknownLabel(s.to_owned()))
	}
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct Features {
	pub seats: u8,
	pub luggage: u8,
	pub fuel: Fuel,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct Car {
	pub id: u32,
	pub name: String,
	pub category: Category,
	/// Daily rate in whole dollars.
	pub price: u32,
	pub image: String,
	pub features: Features,
	pub rating: f32,
	pub reviews: u32,
}

/// The rentable fleet. Built once at start-up and only ever read afterwards.
#[derive(Debug, Clone)]
pub struct Fleet {
	cars: Vec<Car>,
}

impl Fleet {
	pub fn new(cars: Vec<Car>) -> anyhow::Result<Self> {
		if cars.is_empty() {
			bail!("fleet must contain at least one car");
		}
		let mut seen = HashSet::with_capacity(cars.len());
		for car in &cars {
			if car.id == 0 {
				bail!("car '{}' has id 0, ids must be positive", car.name);
			}
			if !seen.insert(car.id) {
				bail!("duplicate car id {}", car.id);
			}
			if car.price == 0 {
				bail!("car {} has no daily price", car.id);
			}
			if !(0.0..=5.0).contains(&car.rating) {
				bail!("car {} has rating {} outside 0-5", car.id, car.rating);
			}
		}
		Ok(Fleet { cars })
	}

	pub fn from_json(raw: &str) -> anyhow::Result<Self> {
		let cars: Vec<Car> = serde_json::from_str(raw).context("fleet is not a valid list of cars")?;
		Fleet::new(cars)
	}

	pub fn embedded() -> anyhow::Result<Self> {
		Fleet::from_json(EMBEDDED_FLEET)
	}

	/// Reads the fleet from `path`, or falls back to the copy compiled into the binary.
	pub fn load(path: Option<&FsPath>) -> anyhow::Result<Self> {
		match path {
			Some(path) => {
				let raw = fs::read_to_string(path).with_context(|| format!("unable to read fleet file {}", path.display()))?;
				Fleet::from_json(&raw).with_context(|| format!("invalid fleet file {}", path.display()))
			}
			None => Fleet::embedded(),
		}
	}

	pub fn cars(&self) -> &[Car] {
		&self.cars
	}

	pub fn len(&self) -> usize {
		self.cars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.cars.is_empty()
	}

	pub fn resolve(&self, id: u32) -> Option<&Car> {
		self.cars.iter().find(|car| car.id == id)
	}

	/// Resolves a route segment; anything that is not an integer resolves to nothing.
	pub fn resolve_param(&self, raw: &str) -> Option<&Car> {
		raw.trim().parse::<u32>().ok().and_then(|id| self.resolve(id))
	}

	/// Every other car in fleet order. An id that isn't in the fleet excludes nothing.
	pub fn related(&self, id: u32) -> Vec<&Car> {
		self.cars.iter().filter(|car| car.id != id).collect()
	}
}

#[derive(serde::Serialize, Debug)]
pub struct CarDetail {
	pub car: Car,
	pub related: Vec<Car>,
}

pub async fn get_cars(state: State<AppState>) -> Json<Vec<Car>> {
	Json(state.fleet.cars().to_vec())
}

pub async fn car_detail(state: State<AppState>, Path(id): Path<String>) -> ApiResult<Json<CarDetail>> {
	let Some(car) = state.fleet.resolve_param(&id) else {
		log::debug!("no car for route id '{}'", id);
		return Err(ApiError::CarNotFound(id));
	};
	let related = state.fleet.related(car.id).into_iter().cloned().collect();
	Ok(Json(CarDetail { car: car.clone(), related }))
}
