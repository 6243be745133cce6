macro_rules! v1_path {
    ($path:literal) => {
        concat!("/api/v1", $path)
    };
}

/// Versioned backend routes consumed by the landing page
pub mod v1 {
    pub mod landing {
        pub const SECTIONS: &str = v1_path!("/landing/sections");
    }

    pub mod collections {
        /// Path segments preceding the collection name.
        pub const PREFIX: [&str; 3] = ["api", "v1", "collections"];
        pub const PRODUCTS_SUFFIX: &str = "products";
    }

    pub mod subscribe {
        pub const SUBSCRIBE: &str = v1_path!("/subscribe");
    }
}
