/*
 * Responsibility
 * - Public surface of the middleware layer
 * - auth: access token gatekeeper for protected routes
 * - cors / http: cross-cutting transport concerns
 */
pub mod auth;
pub mod cors;
pub mod http;
