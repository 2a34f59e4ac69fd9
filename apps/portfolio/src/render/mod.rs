// Server-side HTML rendering for the portfolio page.
// Every function here is pure: literal copy or borrowed content in, markup out.

pub mod experience;
pub mod home;
pub mod markup;
pub mod nav;

pub use experience::render_experience;
pub use home::render_home;
pub use nav::render_nav;
