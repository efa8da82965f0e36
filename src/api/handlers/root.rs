pub async fn welcome() -> &'static str {
    "Welcome to the Farm to Table API"
}
