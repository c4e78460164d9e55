//! Presentation components. They render what a page controller holds and
//! report clicks back through event handlers; none of them fetch.

mod card;
pub use card::{Card, CardContent};

mod loader;
pub use loader::{Loader, LoaderSize};

mod navbar;
pub use navbar::{nav_links, NavLink, Navbar};

mod toast;
pub use toast::Toast;
