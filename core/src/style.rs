//! Shared style fragment for the notification overlay.
//!
//! Injected once per page under the reserved identifier
//! [`crate::surface::STYLE_ID`]. Presentation only; nothing here affects the
//! controller's state machine.

/// CSS class that makes the overlay surface visible.
pub const ACTIVE_CLASS: &str = "active";

/// CSS class of the overlay backdrop element.
pub const OVERLAY_CLASS: &str = "notification-overlay";

/// CSS class of the inner content box.
pub const BOX_CLASS: &str = "notification-box";

/// The shared stylesheet fragment, registered once per page.
pub const STYLE_FRAGMENT: &str = r#"
/* Notification Module Styles */
:root {
    --notification-navy: #041225;
    --notification-slate: #0B2A3F;
    --notification-gold: #C89A3A;
    --notification-success: #10b981;
    --notification-danger: #ef4444;
}

.notification-overlay {
    display: none;
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.7);
    z-index: 999;
    align-items: center;
    justify-content: center;
    backdrop-filter: blur(4px);
}

.notification-overlay.active {
    display: flex;
}

.notification-box {
    background: linear-gradient(135deg, var(--notification-navy), var(--notification-slate));
    border: 1px solid rgba(200, 154, 58, 0.3);
    border-radius: 16px;
    padding: 40px;
    width: 90%;
    max-width: 500px;
    animation: slideUp 0.3s ease;
    box-shadow: 0 20px 60px rgba(0, 0, 0, 0.5);
}

@keyframes slideUp {
    from {
        transform: translateY(20px);
        opacity: 0;
    }
    to {
        transform: translateY(0);
        opacity: 1;
    }
}

.notification-header {
    font-size: 24px;
    font-weight: 700;
    margin-bottom: 16px;
    color: var(--notification-gold);
    display: flex;
    align-items: center;
    gap: 12px;
}

.notification-message {
    font-size: 16px;
    color: #cbd5e1;
    margin-bottom: 32px;
    line-height: 1.6;
}

.notification-contact-section {
    margin-bottom: 32px;
    padding: 20px;
    background: rgba(255, 255, 255, 0.05);
    border-radius: 12px;
    border: 1px solid rgba(200, 154, 58, 0.2);
}

.contact-title {
    font-size: 14px;
    font-weight: 600;
    color: var(--notification-gold);
    margin-bottom: 16px;
    text-transform: uppercase;
    letter-spacing: 0.5px;
}

.contact-methods {
    display: grid;
    gap: 12px;
}

.contact-method {
    padding: 12px 16px;
    background: rgba(255, 255, 255, 0.08);
    border: 1px solid rgba(200, 154, 58, 0.2);
    border-radius: 8px;
    cursor: pointer;
    transition: all 0.2s ease;
    display: flex;
    align-items: center;
    gap: 12px;
    color: #e2e8f0;
    text-decoration: none;
    font-size: 14px;
    font-weight: 500;
}

.contact-method:hover {
    background: rgba(200, 154, 58, 0.1);
    border-color: var(--notification-gold);
    color: var(--notification-gold);
    transform: translateX(4px);
}

.notification-buttons {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 12px;
}

.btn-close-notification {
    padding: 12px 24px;
    background: rgba(255, 255, 255, 0.08);
    border: 1px solid rgba(255, 255, 255, 0.2);
    border-radius: 8px;
    color: #94a3b8;
    cursor: pointer;
    font-size: 14px;
    font-weight: 600;
    transition: all 0.2s ease;
}

.btn-close-notification:hover {
    background: rgba(255, 255, 255, 0.12);
    color: white;
}

.btn-contact {
    padding: 12px 24px;
    background: rgba(200, 154, 58, 0.2);
    border: 1px solid var(--notification-gold);
    border-radius: 8px;
    color: var(--notification-gold);
    cursor: pointer;
    font-size: 14px;
    font-weight: 600;
    transition: all 0.2s ease;
}

.btn-contact:hover {
    background: rgba(200, 154, 58, 0.3);
    transform: translateY(-2px);
}

@media (max-width: 480px) {
    .notification-box {
        width: 95%;
        padding: 24px;
    }

    .notification-header {
        font-size: 20px;
    }

    .notification-buttons {
        grid-template-columns: 1fr;
    }
}
"#;
