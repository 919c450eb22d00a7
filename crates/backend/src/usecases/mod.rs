pub mod u001_promotion_editor;
