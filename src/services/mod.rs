pub mod profile_form;
pub mod profile_mutation;
pub mod profile_query;
pub mod revalidate;

pub use profile_form::parse_profile_form;
pub use profile_mutation::{NewProfile, ProfileMutations};
pub use profile_query::{ProfileQueries, MAX_OFFSET, PAGE_SIZE};
pub use revalidate::{Revalidator, LISTING_PATH};
