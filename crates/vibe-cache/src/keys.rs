//! Fixed key names for the persisted blobs.

/// The product collection.
pub const PRODUCTS: &str = "kids-fashion-products";

/// The store's contact block.
pub const CONTACTS: &str = "kids-fashion-contacts";

/// The registered-user list.
pub const USERS: &str = "registered-users";

/// The admin session flag.
pub const ADMIN_SESSION: &str = "admin-auth";
