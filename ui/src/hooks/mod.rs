pub mod use_disclosure;
pub mod use_get_data;
pub mod use_go_back;
pub mod use_mutation;
pub mod use_push_route;
pub mod use_title;

pub use use_disclosure::use_disclosure;
pub use use_get_data::use_get_data;
pub use use_go_back::use_go_back;
pub use use_mutation::{
    MutationHandlers, MutationHookReturn, use_delete_data, use_post_data,
    use_put_data,
};
pub use use_push_route::use_push_route;
pub use use_title::use_title;
