/// The pick-up location field of a rental draft, for clients embedding this crate.
///
/// The server is stateless between requests and never holds one. A client's
/// map picker fills it asynchronously, calling `/location/reverse` per click, so
/// every write bumps a generation and a lookup only lands if nothing newer
/// happened since it started. A late reply for an earlier click can't clobber a
/// later click or something the user typed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LocationSlot {
	text: String,
	generation: u64,
}

/// Handed out by [`LocationSlot::begin_lookup`]; redeemed by [`LocationSlot::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTicket(u64);

impl LocationSlot {
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Direct edit; supersedes any lookup still in flight.
	pub fn set(&mut self, text: impl Into<String>) {
		self.generation += 1;
		self.text = text.into();
	}

	pub fn begin_lookup(&mut self) -> LookupTicket {
		self.generation += 1;
		LookupTicket(self.generation)
	}

	/// Writes `text` if `ticket` is still the newest generation. Returns whether it did.
	pub fn complete(&mut self, ticket: LookupTicket, text: impl Into<String>) -> bool {
		if ticket.0 != self.generation {
			log::debug!("dropping stale location lookup {} (current {})", ticket.0, self.generation);
			return false;
		}
		self.text = text.into();
		true
	}
}
