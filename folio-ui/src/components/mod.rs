//! Page components

pub mod about;
pub mod awards;
pub mod button;
pub mod contact;
pub mod error_display;
pub mod gallery_section;
pub mod gallery_viewer;
pub mod hero;
pub mod icons;
pub mod lightbox;
pub mod nav_menu;
pub mod particles;
pub mod portfolio;
pub mod reveal;

pub use about::AboutSection;
pub use awards::{AwardsSection, InternationalAwardsSection};
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton, LinkButton};
pub use contact::{ContactSection, SiteFooter};
pub use error_display::ContentErrorView;
pub use gallery_section::GallerySectionView;
pub use gallery_viewer::{use_gallery_state, GalleryGrid, GalleryOverlay, GalleryViewer};
pub use hero::HeroSection;
pub use icons::{ChevronLeftIcon, ChevronRightIcon, MapPinIcon, MenuIcon, StarIcon, XIcon};
pub use lightbox::LightboxView;
pub use nav_menu::NavigationBar;
pub use particles::FloatingParticles;
pub use portfolio::PortfolioView;
pub use reveal::RevealSection;
