pub mod merge_pipeline;
pub mod shop_list_pipeline;
