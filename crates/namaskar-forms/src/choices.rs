//! Fixed option lists for the select inputs

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Highest completed education level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Qualification {
	#[serde(rename = "High School")]
	HighSchool,
	#[serde(rename = "Inter Mediate")]
	Intermediate,
	#[serde(rename = "Graduate")]
	Graduate,
	#[serde(rename = "Post Graduate")]
	PostGraduate,
	#[serde(rename = "PhD")]
	PhD,
}

impl Qualification {
	pub const ALL: [Qualification; 5] = [
		Qualification::HighSchool,
		Qualification::Intermediate,
		Qualification::Graduate,
		Qualification::PostGraduate,
		Qualification::PhD,
	];

	/// Value submitted to the backend.
	///
	/// `Intermediate` is sent as `"Inter Mediate"`; existing records on the
	/// server use that spelling.
	pub fn as_str(self) -> &'static str {
		match self {
			Qualification::HighSchool => "High School",
			Qualification::Intermediate => "Inter Mediate",
			Qualification::Graduate => "Graduate",
			Qualification::PostGraduate => "Post Graduate",
			Qualification::PhD => "PhD",
		}
	}

	/// Text shown in the dropdown
	pub fn label(self) -> &'static str {
		match self {
			Qualification::Intermediate => "Intermediate",
			other => other.as_str(),
		}
	}
}

impl fmt::Display for Qualification {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Qualification {
	type Err = ();

	/// Accepts either the wire value or the display label.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		Self::ALL
			.into_iter()
			.find(|q| q.as_str() == s || q.label() == s)
			.ok_or(())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
	Male,
	Female,
	Other,
}

impl Gender {
	pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

	pub fn as_str(self) -> &'static str {
		match self {
			Gender::Male => "Male",
			Gender::Female => "Female",
			Gender::Other => "Other",
		}
	}
}

impl fmt::Display for Gender {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Gender {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		Self::ALL.into_iter().find(|g| g.as_str() == s).ok_or(())
	}
}
