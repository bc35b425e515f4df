pub mod bucket_sort;
pub mod common;
pub mod counting_sort;
pub mod counting_sort_stable;
pub mod radix_digit_pass;
pub mod radix_sort_lsd;
pub mod radix_sort_msd;
