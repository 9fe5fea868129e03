//! Domain model for the dating mini-app client: the backend's JSON shapes,
//! form drafts and their validators, the discovery deck, theme enums and the
//! translation catalog.

pub mod deck;
pub mod error;
pub mod i18n;
pub mod identity;
pub mod models;
pub mod theme;
pub mod validation;

#[cfg(test)]
mod tests;

pub use deck::{DEFAULT_SENSITIVITY, DragOutcome, SwipeAction, SwipeDeck, SwipeRecord};
pub use error::{CoreError, Result as CoreResult};
pub use i18n::{Catalog, Locale, Translations};
pub use identity::{HostUser, IdentityPayload};
pub use models::background::{Education, Occupation};
pub use models::catalog::{INTERESTS, LANGUAGES, is_known_interest, is_known_language};
pub use models::dating_goal::{DatingGoal, PreferredLocation};
pub use models::discovery::{DiscoveryCard, MatchCard, count_new};
pub use models::drafts::{
    Coordinates, DEFAULT_HEIGHT_CM, DEFAULT_MAX_AGE, DEFAULT_MAX_DISTANCE_KM, DEFAULT_MIN_AGE,
    DesiredLocation, PreferencesDraft, ProfileDraft, ProfileUpdate,
};
pub use models::gender::{Gender, GenderPreference};
pub use models::lifestyle::{
    DrinkingPreference, DrinkingStatus, HabitFrequency, HabitTolerance, SmokingPreference,
    SmokingStatus,
};
pub use models::photo::{Photo, UploadedPhoto};
pub use models::preferences::Preferences;
pub use models::profile::Profile;
pub use models::user::User;
pub use theme::{ColorScheme, ThemeMode};
pub use validation::{
    FormField, FormProgress, PreferencesValidator, ProfileForm, ProfileStep, ProfileValidator,
    UploadRejection, ValidationReport, check_upload,
};
