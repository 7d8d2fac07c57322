//! # Rating Aggregator
//!
//! Fetches everything we show for one title:
//! 1. Validate the title (trimmed, non-empty)
//! 2. Run the IMDb, Rotten Tomatoes and cast lookups concurrently
//! 3. Wait for all three
//! 4. Merge, turning every missing field into "N/A"
//!
//! A fault in any lookup fails the whole fetch. There is no partial result.
//!
//! ## Learning Goals
//!
//! This component teaches you:
//! - Async coordination with tokio::join!
//! - Sharing trait objects behind Arc
//! - Error conversion across crate boundaries with #[from]
//! - Instrumentation and timing

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, instrument, warn};

use catalog::{RatingQuery, RatingResult};
use lookups::{CastLookup, ImdbLookup, LookupError, LookupSet, RottenTomatoesLookup, TitleRequest};

use crate::error::RateFindError;

/// Concurrent fan-out over the three title lookups
#[derive(Clone)]
pub struct RatingAggregator {
    imdb: Arc<ImdbLookup>,
    rotten_tomatoes: Arc<RottenTomatoesLookup>,
    cast: Arc<CastLookup>,
}

impl RatingAggregator {
    /// Take the title capabilities of a lookup set
    pub fn new(lookups: &LookupSet) -> Self {
        Self {
            imdb: lookups.imdb.clone(),
            rotten_tomatoes: lookups.rotten_tomatoes.clone(),
            cast: lookups.cast.clone(),
        }
    }

    /// Fetch ratings and lead cast for a title
    ///
    /// # Arguments
    /// * `title` - Raw user input; surrounding whitespace is ignored
    ///
    /// # Returns
    /// * `Ok(RatingResult)` - Every field set, unknown ones as "N/A"
    /// * `Err(RateFindError::Validation)` - Blank title, no lookup was issued
    /// * `Err(RateFindError::Lookup)` - At least one lookup faulted
    #[instrument(skip(self))]
    pub async fn fetch_ratings(&self, title: &str) -> Result<RatingResult, RateFindError> {
        let query = RatingQuery::new(title).inspect_err(|e| debug!("Rejected title: {}", e))?;

        let start_time = Instant::now();
        let request = TitleRequest::from(&query);
        info!("Fetching ratings for {:?}", request.movie_title);

        let (imdb, rotten_tomatoes, cast) = tokio::join!(
            self.imdb.lookup(request.clone()),
            self.rotten_tomatoes.lookup(request.clone()),
            self.cast.lookup(request),
        );

        log_outcome(self.imdb.name(), &imdb);
        log_outcome(self.rotten_tomatoes.name(), &rotten_tomatoes);
        log_outcome(self.cast.name(), &cast);

        // First fault wins, in a fixed order
        let imdb = imdb?;
        let rotten_tomatoes = rotten_tomatoes?;
        let cast = cast?;

        let result = RatingResult::new(
            query.title(),
            imdb.imdb_rating,
            rotten_tomatoes.rotten_tomatoes_rating,
            cast.lead_actor,
            cast.lead_actress,
        );

        info!(
            "Fetched ratings for {:?} in {:.2?}",
            result.title(),
            start_time.elapsed()
        );
        Ok(result)
    }
}

fn log_outcome<T>(lookup: &str, outcome: &Result<T, LookupError>) {
    match outcome {
        Ok(_) => debug!("{} succeeded", lookup),
        Err(e) => warn!("{} faulted: {}", lookup, e),
    }
}
