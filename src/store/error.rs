use thiserror::Error;

/// Problems found while loading seed data. Raised once at load time.
#[derive(Debug, Error)]
pub enum StoreError {
	/// The seed document is not valid JSON for the record shape.
	#[error("failed to parse {store} seed data: {source}")]
	Parse {
		/// `skills` or `risks`.
		store: &'static str,
		/// Underlying decoder error.
		#[source]
		source: serde_json::Error,
	},

	/// A record has an empty identifier.
	#[error("{store} record #{index} has an empty id")]
	EmptyId {
		/// `skills` or `risks`.
		store: &'static str,
		/// Position of the record in the seed list.
		index: usize,
	},

	/// Two records share an identifier.
	#[error("duplicate {store} id `{id}`")]
	DuplicateId {
		/// `skills` or `risks`.
		store: &'static str,
		/// The repeated id.
		id: String,
	},

	/// A skill reports more than 100% progress.
	#[error("skill `{id}` has progress {progress}, expected 0..=100")]
	ProgressOutOfRange {
		/// Offending skill.
		id: String,
		/// Value found.
		progress: u8,
	},

	/// A risk score lies outside 0..=100.
	#[error("risk `{id}` has score {score}, expected 0..=100")]
	ScoreOutOfRange {
		/// Offending risk profile.
		id: String,
		/// Value found.
		score: u8,
	},
}
