mod authorize_test;
mod product_test;
