//! Qt Designer UI descriptor (`.ui`) creator
//!
//! The document is a fixed `QDialog` with a `GmTitleBar` child. The class name is
//! substituted without XML escaping.

use super::TextCreator;

pub const DEFAULT_X: i32 = 0;
pub const DEFAULT_Y: i32 = 0;
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Title bar child widget and its custom widget registration, emitted verbatim
const TITLE_BAR_BLOCK: &str = r#"    <widget class="GmTitleBar" name="gbmp_title" native="true">
    <property name="geometry">
    <rect>
        <x>0</x>
        <y>0</y>
        <width>720</width>
        <height>24</height>
    </rect>
    </property>
    <property name="minimumSize">
    <size>
        <width>0</width>
        <height>24</height>
    </size>
    </property>
    <property name="font">
    <font>
        <family>微软雅黑</family>
    </font>
    </property>
    <property name="autoFillBackground">
    <bool>false</bool>
    </property>
    </widget>
    </widget>
    <customwidgets>
    <customwidget>
    <class>GmTitleBar</class>
    <extends>QWidget</extends>
    <header>GmtitleBar.h</header>
    <container>1</container>
    </customwidget>
    </customwidgets>
    <resources/>
    <connections/>
</ui>
"#;

#[derive(Debug, Clone)]
pub struct UiCreator {
    class_name: String,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
}

impl UiCreator {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            x: DEFAULT_X,
            y: DEFAULT_Y,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    /// Override the dialog geometry
    pub fn with_geometry(mut self, x: i32, y: i32, width: u32, height: u32) -> Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }

    /// Name of the generated `Ui::` form class
    pub fn form_name(&self) -> String {
        format!("{}UI", self.class_name)
    }
}

impl TextCreator for UiCreator {
    fn create(&self) -> String {
        let form = self.form_name();
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<ui version="4.0">
    <class>{form}</class>
    <widget class="QDialog" name="{form}">
    <property name="geometry">
    <rect>
    <x>{x}</x>
    <y>{y}</y>
    <width>{width}</width>
    <height>{height}</height>
    </rect>
    </property>
{title_bar}"#,
            x = self.x,
            y = self.y,
            width = self.width,
            height = self.height,
            title_bar = TITLE_BAR_BLOCK,
        )
    }
}
