//! Data models for GearGuard

pub mod category;
pub mod company;
pub mod enums;
pub mod equipment;
pub mod report;
pub mod request;
pub mod team;
pub mod user;
pub mod work_center;

// Re-export commonly used types
pub use enums::{Priority, RequestStatus, RequestType};
pub use equipment::{Equipment, EquipmentDetails};
pub use request::{MaintenanceRequest, RequestDetails};
pub use team::{Team, TeamDetails};
pub use user::{User, UserShort};
