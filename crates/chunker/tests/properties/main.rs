/// Property tests for the chunker over generated documents: coverage of
/// content, size and overlap bounds, trimming, and termination.

mod coverage;
mod helpers;
mod termination;
